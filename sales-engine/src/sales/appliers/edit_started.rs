//! EditStarted event applier

use crate::sales::traits::EventApplier;
use shared::sale::{EditSession, SaleEvent, SaleEventPayload, SaleSession};

/// EditStarted applier
pub struct EditStartedApplier;

impl EventApplier for EditStartedApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent) {
        if let SaleEventPayload::EditStarted { item_id, draft } = &event.payload {
            session.editing = Some(EditSession {
                item_id: item_id.clone(),
                draft: draft.clone(),
                notice: None,
            });
            session.last_sequence = event.sequence;
            session.updated_at = event.timestamp;
        }
    }
}
