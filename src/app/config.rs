//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with an environment variable
//! override for the provider API key (`ODDS_API_KEY`). Every section is
//! optional and falls back to the defaults below.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::{Bankroll, EvaluatorConfig, MarketShape, ScanConfig, Sport, MAX_BANKROLL};
use crate::error::{ConfigError, Result};

/// Environment variable holding the odds provider API key.
pub const API_KEY_ENV: &str = "ODDS_API_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub odds_api: OddsApiConfig,
    #[serde(default)]
    pub scan: ScanSettings,
    #[serde(default)]
    pub csv_log: CsvLogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Odds provider connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    /// Base URL of the odds API (without the `/v4` path).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bookmaker region to query (e.g. `us`, `uk`, `eu`).
    #[serde(default = "default_region")]
    pub region: String,
    /// Market key; two-way moneyline is `h2h`.
    #[serde(default = "default_market")]
    pub market: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Loaded from `ODDS_API_KEY` at runtime, never from the config file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_base_url() -> String {
    "https://api.the-odds-api.com".into()
}

fn default_region() -> String {
    "us".into()
}

fn default_market() -> String {
    "h2h".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            region: default_region(),
            market: default_market(),
            timeout_ms: default_timeout_ms(),
            api_key: None,
        }
    }
}

/// What to scan and how to size stakes.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    /// Total amount split across the two legs of each opportunity.
    #[serde(default = "default_bankroll")]
    pub bankroll: Decimal,
    /// Minimum guaranteed profit for an opportunity to be reported.
    #[serde(default)]
    pub min_profit: Decimal,
    /// Number of opportunities shown after ranking.
    #[serde(default = "default_top")]
    pub top: usize,
    /// Sports to scan, in order.
    #[serde(default = "default_sports")]
    pub sports: Vec<Sport>,
    /// Handling of markets quoting more than two outcomes.
    #[serde(default)]
    pub market_shape: MarketShape,
}

fn default_bankroll() -> Decimal {
    Decimal::ONE_HUNDRED
}

const fn default_top() -> usize {
    5
}

fn default_sports() -> Vec<Sport> {
    Sport::CATALOG.to_vec()
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            bankroll: default_bankroll(),
            min_profit: Decimal::ZERO,
            top: default_top(),
            sports: default_sports(),
            market_shape: MarketShape::default(),
        }
    }
}

/// Append-only CSV log of accepted opportunities.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvLogConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_csv_path")]
    pub path: PathBuf,
}

const fn default_true() -> bool {
    true
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("data/arbitrage_log.csv")
}

impl Default for CsvLogConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            path: default_csv_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load and validate a config file, then pick up `ODDS_API_KEY`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise start from defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load(path);
        }
        let mut config = Self::default();
        config.read_env();
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.read_env();
        config.validate()?;
        Ok(config)
    }

    fn read_env(&mut self) {
        self.odds_api.api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
    }

    /// Check values that would make a scan meaningless.
    ///
    /// Call again after applying command-line overrides.
    pub fn validate(&self) -> Result<()> {
        if self.odds_api.base_url.is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if self.odds_api.region.is_empty() {
            return Err(ConfigError::MissingField { field: "region" }.into());
        }
        if self.odds_api.market.is_empty() {
            return Err(ConfigError::MissingField { field: "market" }.into());
        }
        if self.scan.bankroll <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "bankroll",
                reason: format!("must be positive, got {}", self.scan.bankroll),
            }
            .into());
        }
        if self.scan.bankroll > MAX_BANKROLL {
            return Err(ConfigError::InvalidValue {
                field: "bankroll",
                reason: format!("must be at most {MAX_BANKROLL}, got {}", self.scan.bankroll),
            }
            .into());
        }
        if self.scan.top == 0 {
            return Err(ConfigError::InvalidValue {
                field: "top",
                reason: "must be at least 1".into(),
            }
            .into());
        }
        if self.scan.sports.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "sports",
                reason: "select at least one sport".into(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected `pretty` or `json`, got `{}`", self.logging.format),
            }
            .into());
        }
        Ok(())
    }

    /// Build the engine configuration, validating the bankroll once.
    pub fn scan_config(&self) -> Result<ScanConfig> {
        Ok(ScanConfig {
            evaluator: EvaluatorConfig {
                bankroll: Bankroll::new(self.scan.bankroll)?,
                min_profit: self.scan.min_profit,
            },
            market_shape: self.scan.market_shape,
        })
    }

    /// Install the global tracing subscriber. Logs go to stderr.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}
