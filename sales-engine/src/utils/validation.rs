//! Input validation helpers
//!
//! Centralized length and magnitude limits. Text limits count characters,
//! not bytes (product names routinely carry accents and `Ñ`).

use crate::sales::SaleError;
use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Product and customer names
pub const MAX_NAME_LEN: usize = 200;

/// Catalogue codes
pub const MAX_CODE_LEN: usize = 64;

/// Document series (`F001`, `B001`, ...)
pub const MAX_SERIES_LEN: usize = 16;

/// RUC / DNI / CE and similar customer document numbers
pub const MAX_DOCUMENT_LEN: usize = 20;

/// Free-text observations
pub const MAX_NOTE_LEN: usize = 500;

// ── Numeric limits ──────────────────────────────────────────────────

/// Max quantity per line
pub const MAX_QUANTITY: i64 = 99_999;

/// Max tax-exclusive unit price
pub const MAX_UNIT_PRICE: i64 = 10_000_000;

// ── Validation helpers (boundary / payload) ─────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

// ── Validation helpers (sale actions) ───────────────────────────────

/// Validate a string for sale actions (max length only).
pub fn validate_sale_text(value: &str, field: &str, max_len: usize) -> Result<(), SaleError> {
    let len = value.trim().chars().count();
    if len > max_len {
        return Err(SaleError::Validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate an optional string for sale actions (max length).
pub fn validate_sale_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), SaleError> {
    match value {
        Some(v) => validate_sale_text(v, field, max_len),
        None => Ok(()),
    }
}
