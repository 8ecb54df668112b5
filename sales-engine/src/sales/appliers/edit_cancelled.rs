//! EditCancelled event applier

use crate::sales::traits::EventApplier;
use shared::sale::{SaleEvent, SaleEventPayload, SaleSession};

/// EditCancelled applier
pub struct EditCancelledApplier;

impl EventApplier for EditCancelledApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent) {
        if let SaleEventPayload::EditCancelled { .. } = &event.payload {
            session.editing = None;
            session.last_sequence = event.sequence;
            session.updated_at = event.timestamp;
        }
    }
}
