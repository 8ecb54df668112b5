//! Event applier implementations
//!
//! Each applier implements the `EventApplier` trait and handles
//! one specific event type. Appliers are PURE functions.

use enum_dispatch::enum_dispatch;

use shared::sale::{SaleEvent, SaleEventPayload, SaleSession};

mod draft_edited;
mod edit_cancelled;
mod edit_draft_changed;
mod edit_rejected;
mod edit_started;
mod header_updated;
mod item_added;
mod item_edited;
mod item_removed;
mod items_cleared;

pub use draft_edited::DraftEditedApplier;
pub use edit_cancelled::EditCancelledApplier;
pub use edit_draft_changed::EditDraftChangedApplier;
pub use edit_rejected::EditRejectedApplier;
pub use edit_started::EditStartedApplier;
pub use header_updated::HeaderUpdatedApplier;
pub use item_added::ItemAddedApplier;
pub use item_edited::ItemEditedApplier;
pub use item_removed::ItemRemovedApplier;
pub use items_cleared::ItemsClearedApplier;

/// Event applier: pure state evolution
///
/// Declared next to [`EventAction`] so the generated dispatch impl sees
/// every applier type.
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent);
}

/// EventAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    HeaderUpdated(HeaderUpdatedApplier),
    DraftEdited(DraftEditedApplier),
    ItemAdded(ItemAddedApplier),
    EditStarted(EditStartedApplier),
    EditDraftChanged(EditDraftChangedApplier),
    EditRejected(EditRejectedApplier),
    ItemEdited(ItemEditedApplier),
    EditCancelled(EditCancelledApplier),
    ItemRemoved(ItemRemovedApplier),
    ItemsCleared(ItemsClearedApplier),
}

/// Convert SaleEvent reference to EventAction
///
/// This is the ONLY place with a match on SaleEventPayload.
impl From<&SaleEvent> for EventAction {
    fn from(event: &SaleEvent) -> Self {
        match &event.payload {
            SaleEventPayload::HeaderUpdated { .. } => {
                EventAction::HeaderUpdated(HeaderUpdatedApplier)
            }
            SaleEventPayload::DraftEdited { .. } => EventAction::DraftEdited(DraftEditedApplier),
            SaleEventPayload::ItemAdded { .. } => EventAction::ItemAdded(ItemAddedApplier),
            SaleEventPayload::EditStarted { .. } => EventAction::EditStarted(EditStartedApplier),
            SaleEventPayload::EditDraftChanged { .. } => {
                EventAction::EditDraftChanged(EditDraftChangedApplier)
            }
            SaleEventPayload::EditRejected { .. } => {
                EventAction::EditRejected(EditRejectedApplier)
            }
            SaleEventPayload::ItemEdited { .. } => EventAction::ItemEdited(ItemEditedApplier),
            SaleEventPayload::EditCancelled { .. } => {
                EventAction::EditCancelled(EditCancelledApplier)
            }
            SaleEventPayload::ItemRemoved { .. } => EventAction::ItemRemoved(ItemRemovedApplier),
            SaleEventPayload::ItemsCleared { .. } => {
                EventAction::ItemsCleared(ItemsClearedApplier)
            }
        }
    }
}

/// Fold one event into the session
pub fn apply_event(session: &mut SaleSession, event: &SaleEvent) {
    EventAction::from(event).apply(session, event);
}
