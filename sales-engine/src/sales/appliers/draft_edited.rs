//! DraftEdited event applier

use crate::sales::traits::EventApplier;
use shared::sale::{SaleEvent, SaleEventPayload, SaleSession};

/// DraftEdited applier
pub struct DraftEditedApplier;

impl EventApplier for DraftEditedApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent) {
        if let SaleEventPayload::DraftEdited { draft } = &event.payload {
            session.draft = draft.clone();
            session.last_sequence = event.sequence;
            session.updated_at = event.timestamp;
        }
    }
}
