//! Sale entry types
//!
//! This module provides the types shared by the sale entry session:
//! - Commands: Requests from the form to change the session
//! - Events: Immutable facts recorded after command processing
//! - Session: The explicit, serializable form state
//! - Payload: The document sent to the "create sale" endpoint

pub mod command;
pub mod event;
pub mod payload;
pub mod session;
pub mod types;

// Re-exports
pub use command::{SaleCommand, SaleCommandPayload};
pub use event::{SaleEvent, SaleEventPayload, SaleEventType};
pub use payload::{SaleLinePayload, SalePayload};
pub use session::{EditSession, SaleSession};
pub use types::*;
