//! Sales Engine - computation core of the "create sale" form
//!
//! # Overview
//!
//! - **Rounding** (`money`): SUNAT half-up rounding, parsing and formatting
//! - **Pricing** (`pricing`): line amounts and document totals with IGV
//! - **Session** (`sales`): explicit form state evolved by commands and events
//! - **Boundary** (`boundary`): upstream JSON records → canonical inputs
//!
//! # Module layout
//!
//! ```text
//! sales-engine/src/
//! ├── core/          # configuration
//! ├── money/         # Decimal rounding and formatting
//! ├── pricing/       # line calculator, order aggregator
//! ├── sales/         # actions, appliers, manager, payload
//! ├── boundary/      # upstream normalization
//! └── utils/         # logger, validation
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sales_engine::sales::{DraftField, SaleCommandPayload, SalesManager};
//! use shared::sale::{ComprobanteType, IGV_RATE, SaleHeader};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 7, 28).unwrap();
//! let mut manager = SalesManager::new(SaleHeader::new(ComprobanteType::Boleta, date), IGV_RATE);
//!
//! for (field, value) in [
//!     (DraftField::Product, "Fierro 1/2"),
//!     (DraftField::Code, "FIE-12"),
//!     (DraftField::Quantity, "3"),
//!     (DraftField::UnitPrice, "42.373333"),
//! ] {
//!     manager.execute(SaleCommandPayload::EditDraft { field, value: value.to_string() });
//! }
//! manager.execute(SaleCommandPayload::AddDraftItem);
//!
//! assert_eq!(manager.totals().formatted().importe_total, "150.00");
//! ```

pub mod boundary;
pub mod core;
pub mod money;
pub mod pricing;
pub mod sales;
pub mod utils;

// Re-export public types
pub use core::{Config, ConfigError};
pub use pricing::{LineAmounts, LineInput, OrderTotals};
pub use sales::{SaleError, SalesManager};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
///
/// Rolled log files older than the retention window are pruned once here.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    let log_dir = config.log_dir();
    init_logger_with_file(&config.log_level, config.log_json, log_dir.as_deref())?;

    if let Some(dir) = &log_dir {
        match cleanup_old_logs(std::path::Path::new(dir), config.log_retention_days) {
            Ok(0) => {}
            Ok(removed) => tracing::info!(removed, "Pruned old log files"),
            Err(e) => tracing::warn!(error = %e, "Failed to clean up old logs"),
        }
    }

    tracing::debug!(
        environment = %config.environment,
        igv_rate = %config.igv_rate,
        "Environment ready"
    );
    Ok(config)
}
