//! Core traits of the sale reducer
//!
//! - [`CommandHandler`]: validates a command against the session and emits events
//! - [`EventApplier`]: folds one event into the session (pure)
//! - [`CommandContext`]: read-only session view plus sequence allocation

use shared::error::{AppError, ErrorCode};
use shared::sale::{CommandError, CommandErrorCode, SaleCommand, SaleEvent, SaleSession};
use thiserror::Error;

pub use super::appliers::EventApplier;

/// Reasons a command is rejected without touching the session
#[derive(Debug, Error)]
pub enum SaleError {
    #[error("Line item incomplete, missing: {}", .0.join(", "))]
    ItemIncomplete(Vec<&'static str>),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("No line item is being edited")]
    NoEditInProgress,

    #[error("Line item {0} is already being edited")]
    EditInProgress(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid unit price: {0}")]
    InvalidUnitPrice(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl SaleError {
    pub fn code(&self) -> CommandErrorCode {
        match self {
            SaleError::ItemIncomplete(_) => CommandErrorCode::ItemIncomplete,
            SaleError::ItemNotFound(_) => CommandErrorCode::ItemNotFound,
            SaleError::NoEditInProgress => CommandErrorCode::NoEditInProgress,
            SaleError::EditInProgress(_) => CommandErrorCode::EditInProgress,
            SaleError::InvalidQuantity(_) => CommandErrorCode::InvalidQuantity,
            SaleError::InvalidUnitPrice(_) => CommandErrorCode::InvalidUnitPrice,
            SaleError::Validation(_) => CommandErrorCode::ValidationFailed,
        }
    }
}

impl From<SaleError> for CommandError {
    fn from(err: SaleError) -> Self {
        CommandError::new(err.code(), err.to_string())
    }
}

impl From<SaleError> for AppError {
    fn from(err: SaleError) -> Self {
        let code = match &err {
            SaleError::ItemIncomplete(_) => ErrorCode::SaleItemIncomplete,
            SaleError::ItemNotFound(_) => ErrorCode::SaleItemNotFound,
            SaleError::NoEditInProgress => ErrorCode::SaleNoEditInProgress,
            SaleError::EditInProgress(_) => ErrorCode::SaleEditInProgress,
            SaleError::InvalidQuantity(_) => ErrorCode::InvalidQuantity,
            SaleError::InvalidUnitPrice(_) => ErrorCode::InvalidUnitPrice,
            SaleError::Validation(_) => ErrorCode::ValidationFailed,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Identity of the command being executed
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub timestamp: i64,
}

impl From<&SaleCommand> for CommandMetadata {
    fn from(cmd: &SaleCommand) -> Self {
        Self {
            command_id: cmd.command_id.clone(),
            timestamp: cmd.timestamp,
        }
    }
}

/// Execution context handed to a [`CommandHandler`]
///
/// Commands see the session as it was before the command; changes only
/// happen when the emitted events are applied.
pub struct CommandContext<'a> {
    session: &'a SaleSession,
    next_sequence: u64,
}

impl<'a> CommandContext<'a> {
    pub fn new(session: &'a SaleSession) -> Self {
        Self {
            session,
            next_sequence: session.last_sequence,
        }
    }

    pub fn session(&self) -> &'a SaleSession {
        self.session
    }

    /// Allocate the next event sequence number
    pub fn next_sequence(&mut self) -> u64 {
        self.next_sequence += 1;
        self.next_sequence
    }
}

/// Command handler: validation and event generation
pub trait CommandHandler {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError>;
}
