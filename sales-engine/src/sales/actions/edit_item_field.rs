//! EditItemField command handler
//!
//! One keystroke in the line being edited in place. Same synchronization as
//! the staging draft; the committed line is not touched until SaveEdit.

use crate::pricing::apply_draft_edit;
use crate::sales::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use shared::sale::{DraftField, SaleEvent, SaleEventPayload, SaleEventType};

/// EditItemField action
#[derive(Debug, Clone)]
pub struct EditItemFieldAction {
    pub field: DraftField,
    pub value: String,
}

impl CommandHandler for EditItemFieldAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError> {
        let editing = ctx
            .session()
            .editing
            .as_ref()
            .ok_or(SaleError::NoEditInProgress)?;
        let draft = apply_draft_edit(&editing.draft, self.field, &self.value);

        let seq = ctx.next_sequence();
        let event = SaleEvent::new(
            seq,
            metadata.command_id.clone(),
            SaleEventType::EditDraftChanged,
            SaleEventPayload::EditDraftChanged { draft },
        );
        Ok(vec![event])
    }
}
