//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] — Builders for raw events, bookmakers and opportunities.
//! - [`port`] — In-memory [`OddsSource`](crate::port::outbound::odds::OddsSource)
//!   and [`OpportunitySink`](crate::port::outbound::sink::OpportunitySink).

pub mod domain;
pub mod port;
