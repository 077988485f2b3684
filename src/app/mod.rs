//! Application layer - configuration and scan orchestration.

mod config;
mod scanner;

pub use config::{
    Config, CsvLogConfig, LoggingConfig, OddsApiConfig, ScanSettings, API_KEY_ENV,
};
pub use scanner::{ScanReport, Scanner};
