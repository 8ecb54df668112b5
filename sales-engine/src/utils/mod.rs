//! Utility module
//!
//! - [`logger`]: tracing subscriber setup and log retention
//! - [`validation`]: input limits shared by actions and the boundary layer

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
