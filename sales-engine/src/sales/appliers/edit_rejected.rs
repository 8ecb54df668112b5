//! EditRejected event applier
//!
//! The edit stays open; only the notice changes.

use crate::sales::traits::EventApplier;
use shared::sale::{SaleEvent, SaleEventPayload, SaleSession};

/// EditRejected applier
pub struct EditRejectedApplier;

impl EventApplier for EditRejectedApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent) {
        if let SaleEventPayload::EditRejected { message } = &event.payload {
            if let Some(editing) = session.editing.as_mut() {
                editing.notice = Some(message.clone());
            }
            session.last_sequence = event.sequence;
            session.updated_at = event.timestamp;
        }
    }
}
