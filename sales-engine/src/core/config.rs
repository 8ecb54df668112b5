//! Engine configuration loaded from environment variables

use super::error::ConfigError;
use rust_decimal::Decimal;
use shared::sale::IGV_RATE;
use std::str::FromStr;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./work_dir | Working directory (logs live under it in production) |
/// | ENVIRONMENT | development | development, staging or production |
/// | LOG_LEVEL | info | Default tracing filter (`RUST_LOG` wins) |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | unset | Rolling log directory |
/// | LOG_RETENTION_DAYS | 14 | Age after which rolled log files are deleted |
/// | IGV_RATE | 0.18 | IGV rate as a fraction |
/// | CURRENCY_SYMBOL | S/ | Symbol for on-screen amounts |
///
/// # Example
///
/// ```ignore
/// IGV_RATE=0.18 LOG_LEVEL=debug sales-engine sale.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub log_retention_days: i64,
    pub igv_rate: Decimal,
    pub currency_symbol: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Unparsable booleans and integers fall back to their default. An
    /// invalid `IGV_RATE` is an error: every amount depends on it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let igv_rate = match lookup("IGV_RATE") {
            Some(raw) => parse_igv_rate(&raw)?,
            None => IGV_RATE,
        };

        Ok(Self {
            work_dir: lookup("WORK_DIR").unwrap_or_else(|| "./work_dir".into()),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: lookup("LOG_DIR").filter(|v| !v.trim().is_empty()),
            log_retention_days: lookup("LOG_RETENTION_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(14),
            igv_rate,
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or_else(|| "S/".into()),
        })
    }

    /// Directory for rolling log files
    ///
    /// `LOG_DIR` when set; `{WORK_DIR}/logs` in production; otherwise none.
    pub fn log_dir(&self) -> Option<String> {
        match &self.log_dir {
            Some(dir) => Some(dir.clone()),
            None if self.is_production() => Some(format!("{}/logs", self.work_dir)),
            None => None,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "./work_dir".into(),
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            log_retention_days: 14,
            igv_rate: IGV_RATE,
            currency_symbol: "S/".into(),
        }
    }
}

fn parse_igv_rate(raw: &str) -> Result<Decimal, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        key: "IGV_RATE",
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let rate = Decimal::from_str(raw.trim()).map_err(|_| invalid("not a decimal number"))?;
    if rate < Decimal::ZERO || rate >= Decimal::ONE {
        return Err(invalid("must be a fraction in [0, 1)"));
    }
    Ok(rate)
}
