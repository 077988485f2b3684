//! Opportunity sink port.

use crate::domain::Opportunity;
use crate::error::Result;

/// Receives each accepted opportunity exactly once.
///
/// Rejected and skipped events never reach a sink.
pub trait OpportunitySink: Send {
    /// Persist one opportunity.
    fn record(&mut self, opportunity: &Opportunity) -> Result<()>;

    /// Flush buffered records.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
