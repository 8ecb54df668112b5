//! Sale session commands

use super::types::{DraftField, SaleHeader};
use serde::{Deserialize, Serialize};

/// Command sent by the form to the sale session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCommand {
    /// Unique ID (for logging and response correlation)
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    pub payload: SaleCommandPayload,
}

impl SaleCommand {
    pub fn new(payload: SaleCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: crate::util::now_millis(),
            payload,
        }
    }
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleCommandPayload {
    /// Replace header metadata
    UpdateHeader { header: SaleHeader },
    /// Type into the staging line
    EditDraft { field: DraftField, value: String },
    /// Commit the staging line
    AddDraftItem,
    /// Open an in-place edit of a committed line
    StartEdit { item_id: String },
    /// Type into the line being edited
    EditItemField { field: DraftField, value: String },
    /// Commit the in-place edit
    SaveEdit,
    /// Discard the in-place edit
    CancelEdit,
    RemoveItem { item_id: String },
    ClearItems,
}

impl SaleCommandPayload {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateHeader { .. } => "UPDATE_HEADER",
            Self::EditDraft { .. } => "EDIT_DRAFT",
            Self::AddDraftItem => "ADD_DRAFT_ITEM",
            Self::StartEdit { .. } => "START_EDIT",
            Self::EditItemField { .. } => "EDIT_ITEM_FIELD",
            Self::SaveEdit => "SAVE_EDIT",
            Self::CancelEdit => "CANCEL_EDIT",
            Self::RemoveItem { .. } => "REMOVE_ITEM",
            Self::ClearItems => "CLEAR_ITEMS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_payload_tagging() {
        let payload = SaleCommandPayload::EditDraft {
            field: DraftField::UnitPrice,
            value: "42.373333".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "EDIT_DRAFT");
        assert_eq!(json["field"], "UNIT_PRICE");
        assert_eq!(json["value"], "42.373333");
    }

    #[test]
    fn test_unit_variant_deserializes() {
        let payload: SaleCommandPayload =
            serde_json::from_str(r#"{"type":"ADD_DRAFT_ITEM"}"#).unwrap();
        assert!(matches!(payload, SaleCommandPayload::AddDraftItem));
        assert_eq!(payload.name(), "ADD_DRAFT_ITEM");
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = SaleCommand::new(SaleCommandPayload::SaveEdit);
        let b = SaleCommand::new(SaleCommandPayload::SaveEdit);
        assert_ne!(a.command_id, b.command_id);
        assert!(a.timestamp > 0);
    }
}
