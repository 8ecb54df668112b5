//! StartEdit command handler
//!
//! Opens an in-place edit of a committed line. Only one line can be edited
//! at a time; the staging draft is left untouched.

use crate::pricing::draft_from_item;
use crate::sales::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use shared::sale::{SaleEvent, SaleEventPayload, SaleEventType};

/// StartEdit action
#[derive(Debug, Clone)]
pub struct StartEditAction {
    pub item_id: String,
}

impl CommandHandler for StartEditAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError> {
        let session = ctx.session();
        if let Some(editing) = &session.editing {
            return Err(SaleError::EditInProgress(editing.item_id.clone()));
        }

        let item = session
            .find_item(&self.item_id)
            .ok_or_else(|| SaleError::ItemNotFound(self.item_id.clone()))?;
        let draft = draft_from_item(item);

        let seq = ctx.next_sequence();
        let event = SaleEvent::new(
            seq,
            metadata.command_id.clone(),
            SaleEventType::EditStarted,
            SaleEventPayload::EditStarted {
                item_id: self.item_id.clone(),
                draft,
            },
        );
        Ok(vec![event])
    }
}
