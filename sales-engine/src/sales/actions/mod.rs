//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles
//! one specific command type.

use crate::sales::traits::{CommandContext, CommandHandler, CommandMetadata, SaleError};
use shared::sale::{SaleCommand, SaleCommandPayload, SaleEvent};

mod add_draft_item;
mod cancel_edit;
mod clear_items;
mod edit_draft;
mod edit_item_field;
mod remove_item;
mod save_edit;
mod start_edit;
mod update_header;

pub use add_draft_item::AddDraftItemAction;
pub use cancel_edit::CancelEditAction;
pub use clear_items::ClearItemsAction;
pub use edit_draft::EditDraftAction;
pub use edit_item_field::EditItemFieldAction;
pub use remove_item::RemoveItemAction;
pub use save_edit::SaveEditAction;
pub use start_edit::StartEditAction;
pub use update_header::UpdateHeaderAction;

/// CommandAction enum - dispatches to concrete action implementations
pub enum CommandAction {
    UpdateHeader(UpdateHeaderAction),
    EditDraft(EditDraftAction),
    AddDraftItem(AddDraftItemAction),
    StartEdit(StartEditAction),
    EditItemField(EditItemFieldAction),
    SaveEdit(SaveEditAction),
    CancelEdit(CancelEditAction),
    RemoveItem(RemoveItemAction),
    ClearItems(ClearItemsAction),
}

impl CommandHandler for CommandAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<Vec<SaleEvent>, SaleError> {
        match self {
            CommandAction::UpdateHeader(action) => action.execute(ctx, metadata),
            CommandAction::EditDraft(action) => action.execute(ctx, metadata),
            CommandAction::AddDraftItem(action) => action.execute(ctx, metadata),
            CommandAction::StartEdit(action) => action.execute(ctx, metadata),
            CommandAction::EditItemField(action) => action.execute(ctx, metadata),
            CommandAction::SaveEdit(action) => action.execute(ctx, metadata),
            CommandAction::CancelEdit(action) => action.execute(ctx, metadata),
            CommandAction::RemoveItem(action) => action.execute(ctx, metadata),
            CommandAction::ClearItems(action) => action.execute(ctx, metadata),
        }
    }
}

/// Convert SaleCommand to CommandAction
///
/// This is the ONLY place with a match on SaleCommandPayload.
impl From<&SaleCommand> for CommandAction {
    fn from(cmd: &SaleCommand) -> Self {
        match &cmd.payload {
            SaleCommandPayload::UpdateHeader { header } => {
                CommandAction::UpdateHeader(UpdateHeaderAction {
                    header: header.clone(),
                })
            }
            SaleCommandPayload::EditDraft { field, value } => {
                CommandAction::EditDraft(EditDraftAction {
                    field: *field,
                    value: value.clone(),
                })
            }
            SaleCommandPayload::AddDraftItem => CommandAction::AddDraftItem(AddDraftItemAction),
            SaleCommandPayload::StartEdit { item_id } => {
                CommandAction::StartEdit(StartEditAction {
                    item_id: item_id.clone(),
                })
            }
            SaleCommandPayload::EditItemField { field, value } => {
                CommandAction::EditItemField(EditItemFieldAction {
                    field: *field,
                    value: value.clone(),
                })
            }
            SaleCommandPayload::SaveEdit => CommandAction::SaveEdit(SaveEditAction),
            SaleCommandPayload::CancelEdit => CommandAction::CancelEdit(CancelEditAction),
            SaleCommandPayload::RemoveItem { item_id } => {
                CommandAction::RemoveItem(RemoveItemAction {
                    item_id: item_id.clone(),
                })
            }
            SaleCommandPayload::ClearItems => CommandAction::ClearItems(ClearItemsAction),
        }
    }
}
