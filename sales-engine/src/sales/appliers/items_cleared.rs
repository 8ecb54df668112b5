//! ItemsCleared event applier

use crate::sales::traits::EventApplier;
use shared::sale::{SaleEvent, SaleEventPayload, SaleSession};

/// ItemsCleared applier
pub struct ItemsClearedApplier;

impl EventApplier for ItemsClearedApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent) {
        if let SaleEventPayload::ItemsCleared { .. } = &event.payload {
            session.items.clear();
            session.editing = None;

            session.last_sequence = event.sequence;
            session.updated_at = event.timestamp;
        }
    }
}
