use thiserror::Error;

/// Errors raised while validating the read-only fixture data at startup.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Record {id} has an empty name")]
    EmptyName { id: u32 },
    #[error("Product {id} has a non-positive price: {price}")]
    InvalidPrice { id: u32, price: f64 },
    #[error("Duplicate record id: {id}")]
    DuplicateId { id: u32 },
}

/// The single domain failure: a requested quantity above the stock ceiling.
///
/// Never propagated as a hard error to the caller. The session actor converts
/// it into a transient banner and leaves the ledger untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Stock insuficiente para {name}. Disponible: {available} {unit}")]
    StockExceeded {
        name: String,
        available: u32,
        unit: String,
    },
}

/// Errors surfaced by the session client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
