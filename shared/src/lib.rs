//! Shared types for the sales workspace
//!
//! Plain data types used by the sales engine and by any front-end that
//! drives it: sale session state, commands, events, the outbound payload,
//! and the unified error types.

pub mod error;
pub mod sale;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
