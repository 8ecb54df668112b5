//! Shared types for the sale entry session

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// IGV rate applied to every taxable line (18%)
pub const IGV_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Fractional digits for monetary amounts (subtotal, tax, total)
pub const MONEY_DECIMALS: u32 = 2;

/// Fractional digits kept for tax-exclusive unit prices
pub const UNIT_PRICE_DECIMALS: u32 = 6;

/// Default currency code for the document
pub const DEFAULT_CURRENCY: &str = "PEN";

// ============================================================================
// Header Types
// ============================================================================

/// Document type of the sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComprobanteType {
    #[default]
    Factura,
    Boleta,
    Proforma,
}

impl ComprobanteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Factura => "FACTURA",
            Self::Boleta => "BOLETA",
            Self::Proforma => "PROFORMA",
        }
    }
}

/// Sale header metadata. Not part of any computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleHeader {
    #[serde(rename = "tipo_comprobante")]
    pub comprobante: ComprobanteType,
    #[serde(default)]
    pub serie: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero: Option<String>,
    #[serde(default)]
    pub cliente: String,
    #[serde(default)]
    pub documento_cliente: String,
    pub fecha_emision: NaiveDate,
    #[serde(default = "default_currency")]
    pub moneda: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacion: Option<String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl SaleHeader {
    /// Empty header for a document issued on `fecha_emision`
    pub fn new(comprobante: ComprobanteType, fecha_emision: NaiveDate) -> Self {
        Self {
            comprobante,
            serie: String::new(),
            numero: None,
            cliente: String::new(),
            documento_cliente: String::new(),
            fecha_emision,
            moneda: default_currency(),
            observacion: None,
        }
    }
}

// ============================================================================
// Line Types
// ============================================================================

/// Which of unit price / subtotal the user typed last
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceSource {
    #[default]
    UnitPrice,
    Subtotal,
}

/// Editable field of a line draft
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DraftField {
    Product,
    Code,
    Quantity,
    UnitPrice,
    Subtotal,
}

/// Line being typed, as raw form text
///
/// `unit_price` and `subtotal` are kept in sync: the field named by `source`
/// holds what the user typed, the other one is re-derived on every edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineDraft {
    pub product: String,
    pub code: String,
    pub quantity: String,
    pub unit_price: String,
    pub subtotal: String,
    #[serde(default)]
    pub source: PriceSource,
}

impl Default for LineDraft {
    fn default() -> Self {
        Self {
            product: String::new(),
            code: String::new(),
            quantity: "1".to_string(),
            unit_price: String::new(),
            subtotal: String::new(),
            source: PriceSource::UnitPrice,
        }
    }
}

/// Committed line of the sale
///
/// `quantity` and `unit_price` are canonical. `subtotal`, `tax` and `total`
/// are derived from them and only ever written by the line calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique ID assigned when the line is appended
    pub id: String,
    /// Product display name
    pub product: String,
    /// Catalogue code
    pub code: String,
    /// Quantity (> 0)
    pub quantity: Decimal,
    /// Tax-exclusive unit price, up to 6 decimals
    pub unit_price: Decimal,
    /// round2(quantity × unit_price)
    pub subtotal: Decimal,
    /// round2(subtotal × IGV rate)
    pub tax: Decimal,
    /// round2(subtotal + tax)
    pub total: Decimal,
}

// ============================================================================
// Command Response Types
// ============================================================================

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command was applied
    pub success: bool,
    /// Sequence of the last event applied (only on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    /// Error details if rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, sequence: Option<u64>) -> Self {
        Self {
            command_id,
            success: true,
            sequence,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            sequence: None,
            error: Some(error),
        }
    }

    /// Message to show the user, if the rejection is meant to be shown
    pub fn user_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|e| e.code.is_user_facing())
            .map(|e| e.message.as_str())
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    /// Draft line lacks product, code or unit price
    ItemIncomplete,
    /// Edited line lacks product, unit price or quantity
    EditIncomplete,
    ItemNotFound,
    NoEditInProgress,
    EditInProgress,
    InvalidQuantity,
    InvalidUnitPrice,
    ValidationFailed,
    InternalError,
}

impl CommandErrorCode {
    /// Whether the UI should surface the rejection to the user.
    ///
    /// An incomplete draft is simply not added; the add button stays a no-op.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::ItemIncomplete)
    }
}
