//! The session actor: owns the cart ledger and all display state.

pub mod service;
pub mod view;

pub use service::*;
pub use view::*;
