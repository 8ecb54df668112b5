//! EditDraftChanged event applier
//!
//! Typing clears the previous rejection notice.

use crate::sales::traits::EventApplier;
use shared::sale::{SaleEvent, SaleEventPayload, SaleSession};

/// EditDraftChanged applier
pub struct EditDraftChangedApplier;

impl EventApplier for EditDraftChangedApplier {
    fn apply(&self, session: &mut SaleSession, event: &SaleEvent) {
        if let SaleEventPayload::EditDraftChanged { draft } = &event.payload {
            if let Some(editing) = session.editing.as_mut() {
                editing.draft = draft.clone();
                editing.notice = None;
            }
            session.last_sequence = event.sequence;
            session.updated_at = event.timestamp;
        }
    }
}
