//! CancelEdit command handler

use crate::sales::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use shared::sale::{SaleEvent, SaleEventPayload, SaleEventType};

/// CancelEdit action
#[derive(Debug, Clone)]
pub struct CancelEditAction;

impl CommandHandler for CancelEditAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError> {
        let item_id = ctx
            .session()
            .editing
            .as_ref()
            .map(|e| e.item_id.clone())
            .ok_or(SaleError::NoEditInProgress)?;

        let seq = ctx.next_sequence();
        let event = SaleEvent::new(
            seq,
            metadata.command_id.clone(),
            SaleEventType::EditCancelled,
            SaleEventPayload::EditCancelled { item_id },
        );
        Ok(vec![event])
    }
}
