//! Core module - configuration and its errors
//!
//! - [`Config`] - engine configuration
//! - [`ConfigError`] - configuration errors

pub mod config;
pub mod error;

pub use config::Config;
pub use error::ConfigError;
