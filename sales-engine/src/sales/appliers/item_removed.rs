//! ItemRemoved event applier
//!
//! Removes the line by ID. An open edit on that line is closed with it.

use crate::sales::traits::EventApplier;
use shared::sale::{SaleEvent, SaleEventPayload, SaleSession};

/// ItemRemoved applier
pub struct ItemRemovedApplier;

impl EventApplier for ItemRemovedApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent) {
        if let SaleEventPayload::ItemRemoved { item_id, .. } = &event.payload {
            session.items.retain(|i| &i.id != item_id);

            if session
                .editing
                .as_ref()
                .is_some_and(|e| &e.item_id == item_id)
            {
                session.editing = None;
            }

            session.last_sequence = event.sequence;
            session.updated_at = event.timestamp;
        }
    }
}
