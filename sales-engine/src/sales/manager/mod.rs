//! SalesManager - command processing for one sale session
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Convert command to action
//!     ├─ 2. Execute action against the current session → events
//!     ├─ 3. Apply events to the session via EventApplier
//!     └─ 4. Return response
//! ```
//!
//! A rejected command leaves the session untouched. The one exception is a
//! refused SaveEdit: it is recorded as an `EditRejected` event (so the
//! notice lands in the session) and answered with `EditIncomplete`.

use super::actions::CommandAction;
use super::appliers::apply_event;
use super::payload::build_payload;
use super::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use crate::core::Config;
use crate::pricing::{OrderTotals, aggregate};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::sale::{
    CommandError, CommandErrorCode, CommandResponse, ComprobanteType, SaleCommand,
    SaleCommandPayload, SaleEvent, SaleEventPayload, SaleHeader, SalePayload, SaleSession,
};

/// Owns one sale session and evolves it command by command
#[derive(Debug, Clone)]
pub struct SalesManager {
    session: SaleSession,
}

impl SalesManager {
    pub fn new(header: SaleHeader, igv_rate: Decimal) -> Self {
        Self::from_session(SaleSession::new(header, igv_rate))
    }

    /// Resume from a persisted session
    pub fn from_session(session: SaleSession) -> Self {
        Self { session }
    }

    /// Blank sale of the given document type, using the configured IGV rate
    pub fn from_config(config: &Config, comprobante: ComprobanteType, fecha: NaiveDate) -> Self {
        Self::new(SaleHeader::new(comprobante, fecha), config.igv_rate)
    }

    pub fn session(&self) -> &SaleSession {
        &self.session
    }

    pub fn into_session(self) -> SaleSession {
        self.session
    }

    /// Document totals, derived from the current lines on every call
    pub fn totals(&self) -> OrderTotals {
        aggregate(&self.session.items, self.session.igv_rate)
    }

    /// Outbound payload for the remote "create sale" endpoint
    pub fn build_payload(&self) -> AppResult<SalePayload> {
        build_payload(&self.session)
    }

    /// Execute a command payload with a fresh command envelope
    pub fn execute(&mut self, payload: SaleCommandPayload) -> CommandResponse {
        self.execute_command(SaleCommand::new(payload))
    }

    /// Execute a command and return the response
    pub fn execute_command(&mut self, cmd: SaleCommand) -> CommandResponse {
        self.execute_command_with_events(cmd).0
    }

    /// Execute a command and return both the response and the applied events
    pub fn execute_command_with_events(
        &mut self,
        cmd: SaleCommand,
    ) -> (CommandResponse, Vec<SaleEvent>) {
        tracing::debug!(
            command_id = %cmd.command_id,
            command = cmd.payload.name(),
            "Processing command"
        );

        match process_command(&self.session, &cmd) {
            Ok(events) => {
                for event in &events {
                    apply_event(&mut self.session, event);
                }
                (respond(cmd.command_id, &events), events)
            }
            Err(err) => {
                if err.code().is_user_facing() {
                    tracing::warn!(
                        command_id = %cmd.command_id,
                        command = cmd.payload.name(),
                        error = %err,
                        "Command rejected"
                    );
                } else {
                    tracing::debug!(
                        command_id = %cmd.command_id,
                        command = cmd.payload.name(),
                        error = %err,
                        "Command ignored"
                    );
                }
                (CommandResponse::error(cmd.command_id, err.into()), vec![])
            }
        }
    }
}

/// Pure form of [`SalesManager::execute_command`]
///
/// Returns the next session and the response; the input is not modified.
pub fn reduce(session: &SaleSession, cmd: &SaleCommand) -> (SaleSession, CommandResponse) {
    let mut manager = SalesManager::from_session(session.clone());
    let response = manager.execute_command(cmd.clone());
    (manager.into_session(), response)
}

/// Rebuild a session by folding recorded events over an initial state
pub fn replay(initial: SaleSession, events: &[SaleEvent]) -> SaleSession {
    events.iter().fold(initial, |mut session, event| {
        apply_event(&mut session, event);
        session
    })
}

fn process_command(session: &SaleSession, cmd: &SaleCommand) -> Result<Vec<SaleEvent>, SaleError> {
    let metadata = CommandMetadata::from(cmd);
    let action = CommandAction::from(cmd);
    let mut ctx = CommandContext::new(session);
    action.execute(&mut ctx, &metadata)
}

fn respond(command_id: String, events: &[SaleEvent]) -> CommandResponse {
    let rejection = events.iter().find_map(|event| match &event.payload {
        SaleEventPayload::EditRejected { message } => Some(message.clone()),
        _ => None,
    });

    match rejection {
        Some(message) => CommandResponse::error(
            command_id,
            CommandError::new(CommandErrorCode::EditIncomplete, message),
        ),
        None => CommandResponse::success(command_id, events.last().map(|e| e.sequence)),
    }
}
