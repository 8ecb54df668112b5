//! Upstream record normalization
//!
//! Upstream APIs (catalogue lookups, saved drafts, spreadsheet imports) send
//! the same field under different spellings and as strings or numbers. This
//! is the single place where that is resolved; everything past it works on
//! [`LineInput`] / [`CatalogEntry`] only.
//!
//! Accepted keys per field, first match wins:
//!
//! | Field | Keys |
//! |-------|------|
//! | product | `PRODUCTO`, `producto`, `NOMBRE` |
//! | code | `CODIGO`, `codigo` |
//! | quantity | `CANTIDAD`, `cantidad` |
//! | unit price | `PRECIO_VENTA`, `precio_venta`, `PRECIO` |
//! | subtotal | `BASE_GRAVADA`, `base_gravada` |

use crate::money::{parse_amount, round_unit_price};
use crate::pricing::{LineInput, unit_price_from_subtotal};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use shared::error::{AppError, AppResult};
use std::str::FromStr;

pub const PRODUCT_KEYS: &[&str] = &["PRODUCTO", "producto", "NOMBRE"];
pub const CODE_KEYS: &[&str] = &["CODIGO", "codigo"];
pub const QUANTITY_KEYS: &[&str] = &["CANTIDAD", "cantidad"];
pub const UNIT_PRICE_KEYS: &[&str] = &["PRECIO_VENTA", "precio_venta", "PRECIO"];
pub const SUBTOTAL_KEYS: &[&str] = &["BASE_GRAVADA", "base_gravada"];

/// Catalogue lookup result for a product code
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub code: String,
    pub product: String,
    /// Tax-exclusive list price, when the catalogue carries one
    pub unit_price: Option<Decimal>,
}

/// Normalize one upstream line record
///
/// Missing text fields become empty strings (the add gate rejects them
/// later); a missing quantity defaults to 1. Non-numeric or negative
/// amounts become 0. The unit price comes from the price keys, or is
/// back-computed from the subtotal keys when no price is present.
///
/// # Errors
/// - `InvalidFormat` when the record is not a JSON object
/// - `RequiredField` when neither a unit price nor a subtotal is present
pub fn normalize_line(record: &Value) -> AppResult<LineInput> {
    let object = as_object(record)?;

    let quantity = match lookup(object, QUANTITY_KEYS) {
        Some(value) => value_to_amount(value),
        None => Decimal::ONE,
    };

    let unit_price = match lookup(object, UNIT_PRICE_KEYS) {
        Some(value) => value_to_amount(value),
        None => {
            let subtotal = lookup(object, SUBTOTAL_KEYS)
                .map(value_to_amount)
                .ok_or_else(|| AppError::required(UNIT_PRICE_KEYS[0]))?;
            unit_price_from_subtotal(subtotal, quantity).unwrap_or(Decimal::ZERO)
        }
    };

    Ok(LineInput {
        product: lookup_text(object, PRODUCT_KEYS),
        code: lookup_text(object, CODE_KEYS),
        quantity,
        unit_price: round_unit_price(unit_price),
    })
}

/// Normalize one catalogue lookup record
///
/// # Errors
/// - `InvalidFormat` when the record is not a JSON object
/// - `RequiredField` when the code is missing or blank
pub fn normalize_catalog_entry(record: &Value) -> AppResult<CatalogEntry> {
    let object = as_object(record)?;

    let code = lookup_text(object, CODE_KEYS);
    if code.is_empty() {
        return Err(AppError::required(CODE_KEYS[0]));
    }

    Ok(CatalogEntry {
        code,
        product: lookup_text(object, PRODUCT_KEYS),
        unit_price: lookup(object, UNIT_PRICE_KEYS).map(value_to_amount),
    })
}

/// Normalize a catalogue response: a bare array, or an object wrapping the
/// array under `data` / `productos`
///
/// Records that fail to normalize are skipped with a warning.
pub fn normalize_catalog(response: &Value) -> Vec<CatalogEntry> {
    let records: &[Value] = match response {
        Value::Array(records) => records.as_slice(),
        Value::Object(object) => ["data", "productos"]
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    };

    records
        .iter()
        .filter_map(|record| match normalize_catalog_entry(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping catalogue record");
                None
            }
        })
        .collect()
}

// ==================== Value helpers ====================

fn as_object(record: &Value) -> AppResult<&Map<String, Value>> {
    record.as_object().ok_or_else(|| {
        AppError::invalid_format(format!("expected a JSON object, got {}", json_kind(record)))
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// First present, non-null value among `keys`
fn lookup<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

fn lookup_text(object: &Map<String, Value>, keys: &[&str]) -> String {
    lookup(object, keys).map(value_to_text).unwrap_or_default()
}

/// Text of a string or number value; anything else is empty
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Amount from a string or number value; non-numeric or negative is 0
pub fn value_to_amount(value: &Value) -> Decimal {
    let amount = match value {
        Value::String(s) => parse_amount(s),
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        _ => None,
    };

    amount
        .filter(|d| !d.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use shared::error::ErrorCode;

    #[test]
    fn test_normalize_upper_case_record() {
        let line = normalize_line(&json!({
            "PRODUCTO": " Fierro 1/2 ",
            "CODIGO": "FIE-12",
            "CANTIDAD": "3",
            "PRECIO_VENTA": "42.373333"
        }))
        .unwrap();

        assert_eq!(line.product, "Fierro 1/2");
        assert_eq!(line.code, "FIE-12");
        assert_eq!(line.quantity, dec!(3));
        assert_eq!(line.unit_price, dec!(42.373333));
    }

    #[test]
    fn test_normalize_lower_case_and_numbers() {
        let line = normalize_line(&json!({
            "producto": "Cemento",
            "codigo": 4021,
            "cantidad": 2,
            "precio_venta": 483.05
        }))
        .unwrap();

        assert_eq!(line.code, "4021");
        assert_eq!(line.quantity, dec!(2));
        assert_eq!(line.unit_price, dec!(483.05));
    }

    #[test]
    fn test_normalize_synonyms() {
        let line = normalize_line(&json!({
            "NOMBRE": "Arena fina",
            "CODIGO": "ARE",
            "PRECIO": "10"
        }))
        .unwrap();

        assert_eq!(line.product, "Arena fina");
        assert_eq!(line.quantity, Decimal::ONE);
        assert_eq!(line.unit_price, dec!(10));
    }

    #[test]
    fn test_normalize_from_subtotal() {
        let line = normalize_line(&json!({
            "PRODUCTO": "Cemento",
            "CODIGO": "CEM",
            "CANTIDAD": "2",
            "BASE_GRAVADA": "966.10"
        }))
        .unwrap();
        assert_eq!(line.unit_price, dec!(483.05));
    }

    #[test]
    fn test_non_numeric_amounts_become_zero() {
        let line = normalize_line(&json!({
            "PRODUCTO": "Arena",
            "CANTIDAD": "muchos",
            "PRECIO_VENTA": -4
        }))
        .unwrap();
        assert_eq!(line.quantity, Decimal::ZERO);
        assert_eq!(line.unit_price, Decimal::ZERO);
        assert_eq!(line.code, "");
    }

    #[test]
    fn test_null_falls_through_to_next_key() {
        let line = normalize_line(&json!({
            "PRODUCTO": null,
            "producto": "Yeso",
            "PRECIO_VENTA": "1,5"
        }))
        .unwrap();
        assert_eq!(line.product, "Yeso");
        assert_eq!(line.unit_price, dec!(1.5));
    }

    #[test]
    fn test_rejects_non_objects_and_missing_price() {
        let err = normalize_line(&json!(["PRODUCTO"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);

        let err = normalize_line(&json!({ "PRODUCTO": "Arena" })).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_catalog_entry() {
        let entry = normalize_catalog_entry(&json!({
            "codigo": "FIE-12",
            "NOMBRE": "Fierro 1/2",
            "PRECIO": 42.373333
        }))
        .unwrap();
        assert_eq!(entry.code, "FIE-12");
        assert_eq!(entry.product, "Fierro 1/2");
        assert_eq!(entry.unit_price, Some(dec!(42.373333)));

        let err = normalize_catalog_entry(&json!({ "NOMBRE": "Sin código" })).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_catalog_response_shapes() {
        let wrapped = json!({
            "data": [
                { "CODIGO": "A", "PRODUCTO": "Arena" },
                { "PRODUCTO": "sin código" },
                "basura"
            ]
        });
        let entries = normalize_catalog(&wrapped);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].code, "A");
        assert_eq!(entries[0].unit_price, None);

        let bare = json!([{ "codigo": "B" }, { "codigo": "C" }]);
        assert_eq!(normalize_catalog(&bare).len(), 2);

        assert!(normalize_catalog(&json!("nada")).is_empty());
    }
}
