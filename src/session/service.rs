use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::app_system::Config;
use crate::catalog::{Catalog, CategoryFilter, CustomerDirectory};
use crate::clients::SessionClient;
use crate::domain::CartLedger;
use crate::error::{CartError, SessionError};
use crate::messages::{ServiceResponse, SessionRequest};
use crate::session::{OrderFlow, SessionSnapshot, StockNotification, Tab};

const CHANNEL_BUFFER: usize = 32;

/// The session actor. Owns the cart ledger and every piece of display state;
/// all mutation happens one message at a time inside [`run`](Self::run).
///
/// Stock violations never fail a request. They raise a [`StockNotification`]
/// that a generation-checked timer clears after the configured TTL.
pub struct SessionService {
    receiver: mpsc::Receiver<SessionRequest>,
    self_sender: mpsc::Sender<SessionRequest>,
    catalog: Arc<Catalog>,
    customers: Arc<CustomerDirectory>,
    ledger: CartLedger,
    active_tab: Tab,
    order_flow: OrderFlow,
    selected_category: CategoryFilter,
    search_term: String,
    selected_customer: Option<u32>,
    notification: Option<StockNotification>,
    notification_generation: u64,
    order_epoch: u64,
    notification_ttl: Duration,
    confirmation_delay: Duration,
}

impl SessionService {
    pub fn new(
        config: &Config,
        catalog: Arc<Catalog>,
        customers: Arc<CustomerDirectory>,
    ) -> (Self, SessionClient) {
        let (sender, receiver) = mpsc::channel(CHANNEL_BUFFER);
        let service = Self {
            receiver,
            self_sender: sender.clone(),
            catalog,
            customers,
            ledger: CartLedger::new(),
            active_tab: Tab::default(),
            order_flow: OrderFlow::default(),
            selected_category: CategoryFilter::default(),
            search_term: String::new(),
            selected_customer: None,
            notification: None,
            notification_generation: 0,
            order_epoch: 0,
            notification_ttl: config.notification_ttl,
            confirmation_delay: config.confirmation_delay,
        };
        let client = SessionClient::new(sender);
        (service, client)
    }

    #[instrument(name = "session_service", skip(self))]
    pub async fn run(mut self) {
        info!("SessionService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::AddProduct {
                    product_id,
                    respond_to,
                } => self.handle_add_product(product_id, respond_to),
                SessionRequest::ChangeQuantity {
                    product_id,
                    delta,
                    respond_to,
                } => self.handle_change_quantity(product_id, delta, respond_to),
                SessionRequest::RemoveLine {
                    product_id,
                    respond_to,
                } => self.handle_remove_line(product_id, respond_to),
                SessionRequest::SetDiscountPercent {
                    percent,
                    respond_to,
                } => self.handle_set_discount_percent(percent, respond_to),
                SessionRequest::SelectTab { tab, respond_to } => {
                    self.handle_select_tab(tab, respond_to)
                }
                SessionRequest::SelectCategory { filter, respond_to } => {
                    self.handle_select_category(filter, respond_to)
                }
                SessionRequest::SetSearchTerm { term, respond_to } => {
                    self.handle_set_search_term(term, respond_to)
                }
                SessionRequest::SelectCustomer {
                    customer_id,
                    respond_to,
                } => self.handle_select_customer(customer_id, respond_to),
                SessionRequest::PlaceOrder { respond_to } => self.handle_place_order(respond_to),
                SessionRequest::CancelOrder { respond_to } => self.handle_cancel_order(respond_to),
                SessionRequest::Snapshot { respond_to } => self.handle_snapshot(respond_to),
                SessionRequest::ClearNotification { generation } => {
                    self.handle_clear_notification(generation)
                }
                SessionRequest::CompleteOrder { epoch } => self.handle_complete_order(epoch),
                SessionRequest::Shutdown => {
                    info!("SessionService shutting down");
                    break;
                }
            }
        }
        info!("SessionService stopped");
    }

    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    fn handle_add_product(&mut self, product_id: u32, respond_to: ServiceResponse<(), SessionError>) {
        debug!("Processing add_product request");
        match self.catalog.get(product_id) {
            Some(product) => match self.ledger.add_product(product) {
                Ok(()) => info!(product = %product.name, "Product added to cart"),
                Err(err) => self.raise_notification(err),
            },
            None => debug!("Product not in catalog, ignoring"),
        }
        self.refresh_flow();
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(product_id = %product_id, delta = %delta), skip(self, respond_to))]
    fn handle_change_quantity(
        &mut self,
        product_id: u32,
        delta: i32,
        respond_to: ServiceResponse<(), SessionError>,
    ) {
        debug!("Processing change_quantity request");
        if let Err(err) = self.ledger.change_quantity(product_id, delta) {
            self.raise_notification(err);
        }
        self.refresh_flow();
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    fn handle_remove_line(&mut self, product_id: u32, respond_to: ServiceResponse<(), SessionError>) {
        debug!("Processing remove_line request");
        self.ledger.remove_line(product_id);
        self.refresh_flow();
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(percent = %percent), skip(self, respond_to))]
    fn handle_set_discount_percent(
        &mut self,
        percent: f64,
        respond_to: ServiceResponse<(), SessionError>,
    ) {
        debug!("Processing set_discount_percent request");
        self.ledger.set_discount_percent(percent);
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_select_tab(&mut self, tab: Tab, respond_to: ServiceResponse<(), SessionError>) {
        debug!("Processing select_tab request");
        self.active_tab = tab;
        self.refresh_flow();
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_select_category(
        &mut self,
        filter: CategoryFilter,
        respond_to: ServiceResponse<(), SessionError>,
    ) {
        debug!("Processing select_category request");
        self.selected_category = filter;
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to, term))]
    fn handle_set_search_term(&mut self, term: String, respond_to: ServiceResponse<(), SessionError>) {
        debug!("Processing set_search_term request");
        self.search_term = term;
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_select_customer(
        &mut self,
        customer_id: Option<u32>,
        respond_to: ServiceResponse<(), SessionError>,
    ) {
        debug!("Processing select_customer request");
        match customer_id {
            None => self.selected_customer = None,
            Some(id) if self.customers.get(id).is_some() => self.selected_customer = Some(id),
            Some(id) => debug!(customer_id = %id, "Customer not in directory, ignoring"),
        }
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_place_order(&mut self, respond_to: ServiceResponse<(), SessionError>) {
        info!(total = %self.ledger.total(), "Order placed, confirmation pending");
        self.order_flow = OrderFlow::Confirming;
        self.order_epoch += 1;
        let epoch = self.order_epoch;
        let sender = self.self_sender.clone();
        let delay = self.confirmation_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = sender.send(SessionRequest::CompleteOrder { epoch }).await;
        });
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_cancel_order(&mut self, respond_to: ServiceResponse<(), SessionError>) {
        info!("Order cancelled, resetting session");
        self.ledger.clear();
        self.selected_customer = None;
        self.notification = None;
        self.active_tab = Tab::Products;
        self.order_flow = OrderFlow::Browsing;
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_snapshot(&self, respond_to: ServiceResponse<SessionSnapshot, SessionError>) {
        debug!("Processing snapshot request");
        let snapshot = SessionSnapshot {
            lines: self.ledger.lines().to_vec(),
            subtotal: self.ledger.subtotal(),
            discount_percent: self.ledger.discount_percent(),
            discount_amount: self.ledger.discount_amount(),
            total: self.ledger.total(),
            active_tab: self.active_tab,
            order_flow: self.order_flow,
            selected_category: self.selected_category,
            search_term: self.search_term.clone(),
            selected_customer: self
                .selected_customer
                .and_then(|id| self.customers.get(id).cloned()),
            notification: self.notification.clone(),
            visible_products: self
                .catalog
                .filter(self.selected_category, &self.search_term)
                .into_iter()
                .cloned()
                .collect(),
        };
        let _ = respond_to.send(Ok(snapshot));
    }

    #[instrument(fields(generation = %generation), skip(self))]
    fn handle_clear_notification(&mut self, generation: u64) {
        if generation == self.notification_generation {
            debug!("Notification expired");
            self.notification = None;
        } else {
            debug!("Stale notification timer ignored");
        }
    }

    #[instrument(fields(epoch = %epoch), skip(self))]
    fn handle_complete_order(&mut self, epoch: u64) {
        if epoch != self.order_epoch || self.order_flow != OrderFlow::Confirming {
            debug!("Stale order completion timer ignored");
            return;
        }
        info!("Order confirmed, resetting session");
        self.ledger.clear();
        self.active_tab = Tab::Products;
        self.order_flow = OrderFlow::Browsing;
    }

    /// Raises the stock banner and arms its auto-clear timer. The generation
    /// ties the timer to this particular banner so a newer one survives it.
    fn raise_notification(&mut self, err: CartError) {
        warn!(error = %err, "Stock ceiling rejected the request");
        self.notification_generation += 1;
        let generation = self.notification_generation;
        self.notification = Some(StockNotification {
            message: err.to_string(),
        });
        let sender = self.self_sender.clone();
        let ttl = self.notification_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let _ = sender
                .send(SessionRequest::ClearNotification { generation })
                .await;
        });
    }

    fn refresh_flow(&mut self) {
        if self.order_flow == OrderFlow::Confirming {
            return;
        }
        self.order_flow = if self.active_tab == Tab::Cart && !self.ledger.is_empty() {
            OrderFlow::Reviewing
        } else {
            OrderFlow::Browsing
        };
    }
}
