//! Sale session events

use super::types::{LineDraft, LineItem, SaleHeader};
use serde::{Deserialize, Serialize};

/// Immutable fact produced by a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleEvent {
    /// Event unique ID
    pub event_id: String,
    /// Session sequence number (ordering and replay)
    pub sequence: u64,
    /// Server timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Command that triggered this event
    pub command_id: String,
    pub event_type: SaleEventType,
    pub payload: SaleEventPayload,
}

impl SaleEvent {
    pub fn new(
        sequence: u64,
        command_id: String,
        event_type: SaleEventType,
        payload: SaleEventPayload,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            sequence,
            timestamp: crate::util::now_millis(),
            command_id,
            event_type,
            payload,
        }
    }
}

/// Event type enumeration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleEventType {
    HeaderUpdated,
    DraftEdited,
    ItemAdded,
    EditStarted,
    EditDraftChanged,
    EditRejected,
    ItemEdited,
    EditCancelled,
    ItemRemoved,
    ItemsCleared,
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleEventPayload {
    HeaderUpdated {
        header: SaleHeader,
    },
    /// Staging line after bidirectional sync
    DraftEdited {
        draft: LineDraft,
    },
    /// Finalized line, already carrying its ID
    ItemAdded {
        item: LineItem,
    },
    EditStarted {
        item_id: String,
        draft: LineDraft,
    },
    EditDraftChanged {
        draft: LineDraft,
    },
    /// Save refused; the edit stays open with this message
    EditRejected {
        message: String,
    },
    /// Recomputed line replacing the one with the same ID
    ItemEdited {
        item: LineItem,
    },
    EditCancelled {
        item_id: String,
    },
    ItemRemoved {
        item_id: String,
        product: String,
    },
    ItemsCleared {
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_new_sets_identity() {
        let event = SaleEvent::new(
            7,
            "cmd-1".to_string(),
            SaleEventType::EditRejected,
            SaleEventPayload::EditRejected {
                message: "Ingrese la cantidad".to_string(),
            },
        );
        assert_eq!(event.sequence, 7);
        assert_eq!(event.command_id, "cmd-1");
        assert!(!event.event_id.is_empty());

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "EDIT_REJECTED");
        assert_eq!(json["payload"]["type"], "EDIT_REJECTED");
    }
}
