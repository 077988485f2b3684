//! Odds source port.

use async_trait::async_trait;

use crate::domain::{RawEvent, Sport};

/// Supplies the current events and bookmaker quotes for a sport.
///
/// Fetching is infallible by contract: an upstream failure degrades to an
/// empty list so a dead provider reads as "no events" rather than aborting
/// the scan. Implementations log the failure themselves.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Fetch every event currently listed for `sport`.
    async fn fetch_odds(&self, sport: &Sport) -> Vec<RawEvent>;

    /// Source name for logging/debugging.
    fn source_name(&self) -> &'static str;
}
