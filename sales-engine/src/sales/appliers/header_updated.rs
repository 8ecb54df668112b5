//! HeaderUpdated event applier

use crate::sales::traits::EventApplier;
use shared::sale::{SaleEvent, SaleEventPayload, SaleSession};

/// HeaderUpdated applier
pub struct HeaderUpdatedApplier;

impl EventApplier for HeaderUpdatedApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent) {
        if let SaleEventPayload::HeaderUpdated { header } = &event.payload {
            session.header = header.clone();
            session.last_sequence = event.sequence;
            session.updated_at = event.timestamp;
        }
    }
}
