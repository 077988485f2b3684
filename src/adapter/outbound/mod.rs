//! Outbound adapters (driven side).

pub mod csv_log;
pub mod odds_api;
