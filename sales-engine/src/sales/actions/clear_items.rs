//! ClearItems command handler
//!
//! Drops every committed line and any open edit. Clearing an empty sale is
//! still a valid (no-op) event.

use crate::sales::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use shared::sale::{SaleEvent, SaleEventPayload, SaleEventType};

/// ClearItems action
#[derive(Debug, Clone)]
pub struct ClearItemsAction;

impl CommandHandler for ClearItemsAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError> {
        let count = ctx.session().items.len();

        let seq = ctx.next_sequence();
        let event = SaleEvent::new(
            seq,
            metadata.command_id.clone(),
            SaleEventType::ItemsCleared,
            SaleEventPayload::ItemsCleared { count },
        );
        Ok(vec![event])
    }
}
