//! Sale session state

use super::types::{LineDraft, LineItem, SaleHeader};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// In-place edit of a committed line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditSession {
    /// Line being edited
    pub item_id: String,
    /// Form text, seeded from the line when the edit starts
    pub draft: LineDraft,
    /// Last rejection message shown to the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Complete state of one sale entry form
///
/// Updated only by applying events; totals are never stored here and
/// must be recomputed from `items` on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleSession {
    pub header: SaleHeader,
    /// Staging area for the next line
    #[serde(default)]
    pub draft: LineDraft,
    /// Committed lines in entry order
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing: Option<EditSession>,
    /// Tax rate used for every line of this sale
    pub igv_rate: Decimal,
    /// Sequence of the last applied event
    #[serde(default)]
    pub last_sequence: u64,
    /// Creation time (Unix milliseconds)
    pub created_at: i64,
    /// Last update time (Unix milliseconds)
    pub updated_at: i64,
}

impl SaleSession {
    pub fn new(header: SaleHeader, igv_rate: Decimal) -> Self {
        let now = crate::util::now_millis();
        Self {
            header,
            draft: LineDraft::default(),
            items: Vec::new(),
            editing: None,
            igv_rate,
            last_sequence: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn find_item(&self, item_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn find_item_mut(&mut self, item_id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}
