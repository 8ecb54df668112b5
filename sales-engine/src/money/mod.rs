//! Money calculation utilities using rust_decimal for precision
//!
//! All amounts are `Decimal` end to end. Monetary values on the document are
//! rounded half-up ("midpoint away from zero") to two decimals, the rounding
//! SUNAT expects on tax documents. Unit prices keep six decimals so that a
//! price back-computed from a subtotal does not drift.
//!
//! `f64` only appears at the edges (`to_decimal`, `to_f64`, `round2_f64`).

use rust_decimal::prelude::*;
use shared::sale::{MONEY_DECIMALS, UNIT_PRICE_DECIMALS};
use std::str::FromStr;

/// Rounding strategy for every amount on the document (half-up)
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Nudge added to binary floats before rounding (1e-9)
///
/// `10.005_f64` is stored as 10.00499999999999989..., which would round down.
pub const MIDPOINT_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 9);

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
///
/// NaN/Infinity logs an error and returns ZERO rather than poisoning a total.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2(value).to_f64().unwrap_or_else(|| {
        tracing::error!(value = %value, "Decimal not representable as f64, defaulting to zero");
        0.0
    })
}

// ==================== Rounding ====================

/// Round a monetary amount half-up to 2 decimals
#[inline]
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMALS, ROUNDING)
}

/// Round a binary float half-up to 2 decimals
///
/// Adds [`MIDPOINT_EPSILON`] (towards the sign of the amount) before
/// rounding so a value meant to sit exactly on .xx5 rounds away from zero.
/// Finite values too large for `Decimal` have no fractional part and are
/// returned unchanged; non-finite input yields 0.
pub fn round2_f64(amount: f64) -> f64 {
    if !amount.is_finite() {
        return to_f64(to_decimal(amount));
    }
    let Some(value) = Decimal::from_f64(amount) else {
        return amount;
    };
    let nudged = if value.is_sign_negative() {
        value - MIDPOINT_EPSILON
    } else {
        value + MIDPOINT_EPSILON
    };
    to_f64(nudged)
}

/// Round a tax-exclusive unit price half-up to 6 decimals
#[inline]
pub fn round_unit_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(UNIT_PRICE_DECIMALS, ROUNDING)
}

// ==================== Parsing ====================

/// Parse a form/API amount
///
/// Accepts surrounding whitespace, thousands grouping as printed by
/// [`format_currency`] (`1,234`, `1,234,567.50`) and a lone comma as decimal
/// separator when it is not followed by exactly three digits (`12,5`).
/// Empty, non-numeric or badly grouped text is `None`.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if !trimmed.contains(',') {
        trimmed.to_string()
    } else if is_thousands_grouped(trimmed) {
        trimmed.replace(',', "")
    } else if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        return None;
    };

    Decimal::from_str(&normalized).ok()
}

/// `1,234` / `-12,345,678.9`: first group 1-3 digits, then groups of exactly 3
fn is_thousands_grouped(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let integer = unsigned.split('.').next().unwrap_or_default();
    let mut groups = integer.split(',');
    let all_digits = |g: &str| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit());

    let Some(first) = groups.next() else {
        return false;
    };
    if !all_digits(first) || first.len() > 3 {
        return false;
    }

    let mut rest = 0;
    for group in groups {
        if group.len() != 3 || !all_digits(group) {
            return false;
        }
        rest += 1;
    }
    rest > 0
}

/// Parse an amount, treating empty, non-numeric or negative input as zero
pub fn parse_amount_or_zero(text: &str) -> Decimal {
    parse_amount(text)
        .filter(|d| !d.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}

// ==================== Formatting ====================

/// Format with exactly `dp` fractional digits (half-up)
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, ROUNDING);
    rounded.rescale(dp);
    rounded.to_string()
}

/// Format a monetary amount with exactly 2 decimals (`"127.12"`, `"0.00"`)
#[inline]
pub fn format_fixed2(value: Decimal) -> String {
    format_fixed(value, MONEY_DECIMALS)
}

/// Format a unit price with exactly 6 decimals (`"483.050000"`)
#[inline]
pub fn format_fixed6(value: Decimal) -> String {
    format_fixed(value, UNIT_PRICE_DECIMALS)
}

/// Format a unit price for a form field: up to 6 decimals, no trailing zeros
pub fn format_unit_price(value: Decimal) -> String {
    round_unit_price(value).normalize().to_string()
}

/// Format a quantity without trailing zeros (`"3"`, `"1.5"`)
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Format an amount for on-screen tables: `"S/ 1,234.56"`
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let fixed = format_fixed2(value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if round2(value).is_sign_negative() && !round2(value).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol} {grouped}.{fraction}")
}

// ==================== Comparison ====================

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < MONEY_TOLERANCE
}
