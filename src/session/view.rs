use crate::catalog::CategoryFilter;
use crate::domain::{CartLine, Customer, Product};

/// Top-level tabs of the storefront.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Products,
    Cart,
}

/// The order flow state machine.
///
/// `Browsing → Reviewing` when the cart tab shows a non-empty cart,
/// `Reviewing → Confirming` on place_order, and `Confirming → Browsing`
/// automatically once the confirmation delay elapses. Cancelling reaches
/// `Browsing` from any state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFlow {
    #[default]
    Browsing,
    Reviewing,
    Confirming,
}

/// Transient stock-violation banner. Auto-clears after the configured TTL.
#[derive(Debug, Clone, PartialEq)]
pub struct StockNotification {
    pub message: String,
}

/// Everything the presentation layer needs to render one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub lines: Vec<CartLine>,
    pub subtotal: f64,
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub total: f64,
    pub active_tab: Tab,
    pub order_flow: OrderFlow,
    pub selected_category: CategoryFilter,
    pub search_term: String,
    pub selected_customer: Option<Customer>,
    pub notification: Option<StockNotification>,
    pub visible_products: Vec<Product>,
}
