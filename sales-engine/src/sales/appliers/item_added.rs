//! ItemAdded event applier
//!
//! Appends the finalized line and resets the staging draft so the next
//! line starts from a blank form (quantity 1).

use crate::sales::traits::EventApplier;
use shared::sale::{LineDraft, SaleEvent, SaleEventPayload, SaleSession};

/// ItemAdded applier
pub struct ItemAddedApplier;

impl EventApplier for ItemAddedApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent) {
        if let SaleEventPayload::ItemAdded { item } = &event.payload {
            session.items.push(item.clone());
            session.draft = LineDraft::default();

            session.last_sequence = event.sequence;
            session.updated_at = event.timestamp;
        }
    }
}
