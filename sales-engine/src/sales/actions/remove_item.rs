//! RemoveItem command handler
//!
//! Deletes a committed line by ID. Removing the line being edited also
//! closes the edit (see the ItemRemoved applier).

use crate::sales::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use shared::sale::{SaleEvent, SaleEventPayload, SaleEventType};

/// RemoveItem action
#[derive(Debug, Clone)]
pub struct RemoveItemAction {
    pub item_id: String,
}

impl CommandHandler for RemoveItemAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError> {
        let item = ctx
            .session()
            .find_item(&self.item_id)
            .ok_or_else(|| SaleError::ItemNotFound(self.item_id.clone()))?;
        let product = item.product.clone();

        let seq = ctx.next_sequence();
        let event = SaleEvent::new(
            seq,
            metadata.command_id.clone(),
            SaleEventType::ItemRemoved,
            SaleEventPayload::ItemRemoved {
                item_id: self.item_id.clone(),
                product,
            },
        );
        Ok(vec![event])
    }
}
