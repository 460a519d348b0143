use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::catalog::CategoryFilter;
use crate::error::SessionError;
use crate::messages::{ServiceResponse, SessionRequest};
use crate::session::{SessionSnapshot, Tab};

/// Handle for the session actor. One async method per operation; every
/// request is answered over its own oneshot channel.
#[derive(Clone)]
pub struct SessionClient {
    sender: mpsc::Sender<SessionRequest>,
}

impl SessionClient {
    pub fn new(sender: mpsc::Sender<SessionRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(ServiceResponse<T, SessionError>) -> SessionRequest,
    ) -> Result<T, SessionError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| SessionError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| SessionError::ActorCommunicationError("Actor dropped".to_string()))?
    }

    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: u32) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::AddProduct {
            product_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn change_quantity(&self, product_id: u32, delta: i32) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::ChangeQuantity {
            product_id,
            delta,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_line(&self, product_id: u32) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::RemoveLine {
            product_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn set_discount_percent(&self, percent: f64) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::SetDiscountPercent {
            percent,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn select_tab(&self, tab: Tab) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::SelectTab { tab, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn select_category(&self, filter: CategoryFilter) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::SelectCategory { filter, respond_to })
            .await
    }

    #[instrument(skip(self, term))]
    pub async fn set_search_term(&self, term: impl Into<String>) -> Result<(), SessionError> {
        debug!("Sending request");
        let term = term.into();
        self.request(|respond_to| SessionRequest::SetSearchTerm { term, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn select_customer(&self, customer_id: Option<u32>) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::SelectCustomer {
            customer_id,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::PlaceOrder { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::CancelOrder { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        debug!("Sending request");
        self.request(|respond_to| SessionRequest::Snapshot { respond_to })
            .await
    }

    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.sender
            .send(SessionRequest::Shutdown)
            .await
            .map_err(|_| SessionError::ActorCommunicationError("Actor closed".to_string()))
    }
}
