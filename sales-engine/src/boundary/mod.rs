//! Boundary layer
//!
//! Turns uncontrolled upstream JSON into commands for the sale session.

mod normalize;

pub use normalize::*;

use crate::money::{format_quantity, format_unit_price};
use crate::pricing::LineInput;
use serde::Deserialize;
use serde_json::Value;
use shared::error::AppResult;
use shared::sale::{DraftField, SaleCommandPayload, SaleHeader};

/// Saved sale draft: `{ "header": {...}, "items": [ upstream records ] }`
#[derive(Debug, Clone, Deserialize)]
pub struct SaleDraftInput {
    pub header: SaleHeader,
    #[serde(default)]
    pub items: Vec<Value>,
}

impl SaleDraftInput {
    pub fn from_json(text: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Commands that rebuild this draft in an empty session
    ///
    /// Each record is typed into the staging line and added, exactly as the
    /// form would do it, so the same validation applies.
    pub fn to_commands(&self) -> AppResult<Vec<SaleCommandPayload>> {
        let mut commands = vec![SaleCommandPayload::UpdateHeader {
            header: self.header.clone(),
        }];
        for record in &self.items {
            let line = normalize_line(record)?;
            commands.extend(line_commands(&line));
        }
        Ok(commands)
    }
}

/// Keystroke-level commands that type `line` into the draft and add it
pub fn line_commands(line: &LineInput) -> Vec<SaleCommandPayload> {
    let edit = |field, value: String| SaleCommandPayload::EditDraft { field, value };
    vec![
        edit(DraftField::Product, line.product.clone()),
        edit(DraftField::Code, line.code.clone()),
        edit(DraftField::Quantity, format_quantity(line.quantity)),
        edit(DraftField::UnitPrice, format_unit_price(line.unit_price)),
        SaleCommandPayload::AddDraftItem,
    ]
}

/// Commands that fill the draft from a catalogue lookup
///
/// Quantity is left as typed; the price is only set when the catalogue has one.
pub fn catalog_commands(entry: &CatalogEntry) -> Vec<SaleCommandPayload> {
    let mut commands = vec![
        SaleCommandPayload::EditDraft {
            field: DraftField::Code,
            value: entry.code.clone(),
        },
        SaleCommandPayload::EditDraft {
            field: DraftField::Product,
            value: entry.product.clone(),
        },
    ];
    if let Some(price) = entry.unit_price {
        commands.push(SaleCommandPayload::EditDraft {
            field: DraftField::UnitPrice,
            value: format_unit_price(price),
        });
    }
    commands
}
