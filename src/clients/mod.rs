//! Client handles for talking to the session actor.

pub mod session_client;

pub use session_client::*;
