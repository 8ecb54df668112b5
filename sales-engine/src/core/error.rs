use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        let ConfigError::InvalidValue { key, .. } = &err;
        AppError::with_message(ErrorCode::ConfigError, err.to_string()).with_detail("key", *key)
    }
}
