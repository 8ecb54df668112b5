//! Unified error codes for the sales workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Sale errors
//! - 6xxx: Pricing errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so a browser front-end
/// can switch on them without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Sale ====================
    /// Sale has no line items
    SaleEmpty = 4001,
    /// Line item not found in the sale
    SaleItemNotFound = 4002,
    /// Line item is missing product, code or price
    SaleItemIncomplete = 4003,
    /// No line item is being edited
    SaleNoEditInProgress = 4004,
    /// Another line item is already being edited
    SaleEditInProgress = 4005,

    // ==================== 6xxx: Pricing ====================
    /// Quantity is zero, negative or not a number
    InvalidQuantity = 6001,
    /// Unit price is negative or not a number
    InvalidUnitPrice = 6002,
    /// Tax rate outside [0, 1]
    InvalidTaxRate = 6003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
    /// Serialization error
    SerializationError = 9003,
    /// Input/output error
    IoError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Sale
            ErrorCode::SaleEmpty => "Sale has no line items",
            ErrorCode::SaleItemNotFound => "Line item not found",
            ErrorCode::SaleItemIncomplete => "Line item is incomplete",
            ErrorCode::SaleNoEditInProgress => "No line item is being edited",
            ErrorCode::SaleEditInProgress => "Another line item is being edited",

            // Pricing
            ErrorCode::InvalidQuantity => "Quantity must be greater than zero",
            ErrorCode::InvalidUnitPrice => "Unit price must be zero or greater",
            ErrorCode::InvalidTaxRate => "Tax rate must be between 0 and 1",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::SerializationError => "Serialization error",
            ErrorCode::IoError => "Input/output error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Sale
            4001 => Ok(ErrorCode::SaleEmpty),
            4002 => Ok(ErrorCode::SaleItemNotFound),
            4003 => Ok(ErrorCode::SaleItemIncomplete),
            4004 => Ok(ErrorCode::SaleNoEditInProgress),
            4005 => Ok(ErrorCode::SaleEditInProgress),

            // Pricing
            6001 => Ok(ErrorCode::InvalidQuantity),
            6002 => Ok(ErrorCode::InvalidUnitPrice),
            6003 => Ok(ErrorCode::InvalidTaxRate),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),
            9003 => Ok(ErrorCode::SerializationError),
            9004 => Ok(ErrorCode::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
