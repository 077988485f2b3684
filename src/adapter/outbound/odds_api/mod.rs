//! The Odds API (v4) adapter.

mod client;

pub use client::OddsApiClient;
