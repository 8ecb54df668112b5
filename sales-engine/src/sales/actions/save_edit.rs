//! SaveEdit command handler
//!
//! Commits the in-place edit. Invalid input does not fail the command: it
//! emits `EditRejected`, which keeps the edit open and carries the message
//! shown to the user.

use crate::pricing::{build_line_item, line_input_for_save};
use crate::sales::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use shared::sale::{SaleEvent, SaleEventPayload, SaleEventType};

/// SaveEdit action
#[derive(Debug, Clone)]
pub struct SaveEditAction;

impl CommandHandler for SaveEditAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError> {
        let session = ctx.session();
        let editing = session.editing.as_ref().ok_or(SaleError::NoEditInProgress)?;

        // The line may have been removed while the edit was open
        if session.find_item(&editing.item_id).is_none() {
            return Err(SaleError::ItemNotFound(editing.item_id.clone()));
        }

        let (event_type, payload) = match line_input_for_save(&editing.draft) {
            Ok(input) => {
                let item = build_line_item(editing.item_id.clone(), &input, session.igv_rate);
                (SaleEventType::ItemEdited, SaleEventPayload::ItemEdited { item })
            }
            Err(message) => {
                tracing::debug!(item_id = %editing.item_id, %message, "Edit rejected");
                (
                    SaleEventType::EditRejected,
                    SaleEventPayload::EditRejected { message },
                )
            }
        };

        let seq = ctx.next_sequence();
        Ok(vec![SaleEvent::new(
            seq,
            metadata.command_id.clone(),
            event_type,
            payload,
        )])
    }
}
