//! EditDraft command handler
//!
//! One keystroke in the staging line. The complementary price field is
//! re-derived here so the event carries the whole synchronized draft.

use crate::pricing::apply_draft_edit;
use crate::sales::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use shared::sale::{DraftField, SaleEvent, SaleEventPayload, SaleEventType};

/// EditDraft action
#[derive(Debug, Clone)]
pub struct EditDraftAction {
    pub field: DraftField,
    pub value: String,
}

impl CommandHandler for EditDraftAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError> {
        let draft = apply_draft_edit(&ctx.session().draft, self.field, &self.value);

        let seq = ctx.next_sequence();
        let event = SaleEvent::new(
            seq,
            metadata.command_id.clone(),
            SaleEventType::DraftEdited,
            SaleEventPayload::DraftEdited { draft },
        );
        Ok(vec![event])
    }
}
