//! Smartbet - two-way sportsbook arbitrage finder.
//!
//! Pulls moneyline odds from several bookmakers, keeps the best price for
//! each outcome, and reports events where backing both sides at different
//! books returns more than the combined stake whichever side wins.
//!
//! # Architecture
//!
//! - **`domain`** - Pure logic: price aggregation, stake split, ranking
//! - **`port`** - Traits the application depends on (odds source, sink)
//! - **`adapter`** - HTTP odds client, CSV log and the command-line interface
//! - **`app`** - Configuration and scan orchestration
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use smartbet::adapter::outbound::odds_api::OddsApiClient;
//! use smartbet::app::{Config, Scanner};
//!
//! # async fn run() -> smartbet::error::Result<()> {
//! let config = Config::load_or_default("config.toml")?;
//! let source = Arc::new(OddsApiClient::from_config(&config.odds_api));
//! let scanner = Scanner::new(source, config.scan_config()?, config.scan.top);
//!
//! let report = scanner.run(&config.scan.sports, None).await;
//! for opportunity in &report.ranked {
//!     println!("{} +{}", opportunity.description(), opportunity.profit());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
