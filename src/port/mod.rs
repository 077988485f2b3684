//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the pure arbitrage engine and the outside
//! world: where odds come from and where accepted opportunities go.
//!
//! ```text
//!  ┌────────────┐     ┌──────────────────────┐     ┌──────────────────┐
//!  │ OddsSource │ ──▶ │ domain::scan_events  │ ──▶ │ OpportunitySink  │
//!  └────────────┘     └──────────────────────┘     └──────────────────┘
//! ```

pub mod outbound;
