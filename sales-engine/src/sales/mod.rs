//! Sale entry session
//!
//! The order-entry form is an explicit [`SaleSession`] evolved by commands:
//!
//! ```text
//! SaleCommand → CommandAction (validate) → SaleEvent(s) → EventApplier → SaleSession
//! ```
//!
//! - **actions**: one handler per command, emit events
//! - **appliers**: pure state transitions, one per event
//! - **manager**: [`SalesManager`] ties both together
//! - **payload**: outbound document builder

pub mod actions;
pub mod appliers;
pub mod manager;
pub mod payload;
pub mod traits;

pub use manager::{SalesManager, reduce, replay};
pub use payload::build_payload;
pub use traits::{CommandContext, CommandHandler, CommandMetadata, EventApplier, SaleError};

// Re-export shared types for convenience
pub use shared::sale::{
    CommandError, CommandErrorCode, CommandResponse, DraftField, EditSession, LineDraft, LineItem,
    SaleCommand, SaleCommandPayload, SaleEvent, SaleEventPayload, SaleEventType, SaleHeader,
    SalePayload, SaleSession,
};
