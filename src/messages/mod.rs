use tokio::sync::oneshot;

use crate::catalog::CategoryFilter;
use crate::error::SessionError;
use crate::session::{SessionSnapshot, Tab};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the session actor. Each user-facing variant carries its
/// parameters and a oneshot channel for the response.
///
/// `ClearNotification` and `CompleteOrder` are timer messages the actor sends
/// to itself from spawned delay tasks; they carry the generation they were
/// armed with so stale timers are ignored.
#[derive(Debug)]
pub enum SessionRequest {
    AddProduct {
        product_id: u32,
        respond_to: ServiceResponse<(), SessionError>,
    },
    ChangeQuantity {
        product_id: u32,
        delta: i32,
        respond_to: ServiceResponse<(), SessionError>,
    },
    RemoveLine {
        product_id: u32,
        respond_to: ServiceResponse<(), SessionError>,
    },
    SetDiscountPercent {
        percent: f64,
        respond_to: ServiceResponse<(), SessionError>,
    },
    SelectTab {
        tab: Tab,
        respond_to: ServiceResponse<(), SessionError>,
    },
    SelectCategory {
        filter: CategoryFilter,
        respond_to: ServiceResponse<(), SessionError>,
    },
    SetSearchTerm {
        term: String,
        respond_to: ServiceResponse<(), SessionError>,
    },
    SelectCustomer {
        customer_id: Option<u32>,
        respond_to: ServiceResponse<(), SessionError>,
    },
    PlaceOrder {
        respond_to: ServiceResponse<(), SessionError>,
    },
    CancelOrder {
        respond_to: ServiceResponse<(), SessionError>,
    },
    Snapshot {
        respond_to: ServiceResponse<SessionSnapshot, SessionError>,
    },
    ClearNotification {
        generation: u64,
    },
    CompleteOrder {
        epoch: u64,
    },
    Shutdown,
}
