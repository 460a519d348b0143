//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod shop_system;
pub mod tracing;

pub use self::config::*;
pub use self::shop_system::*;
pub use self::tracing::*;
