//! In-memory port implementations.
//!
//! - [`StaticOddsSource`] — Serves canned events per sport and counts fetches.
//! - [`MemorySink`] — Collects recorded opportunities, optionally failing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{Opportunity, RawEvent, Sport};
use crate::error::{Error, Result};
use crate::port::outbound::odds::OddsSource;
use crate::port::outbound::sink::OpportunitySink;

/// An odds source backed by a fixed map of sport to events.
///
/// Sports without an entry return no events, like a provider that is down.
#[derive(Default)]
pub struct StaticOddsSource {
    events: HashMap<Sport, Vec<RawEvent>>,
    fetches: AtomicUsize,
}

impl StaticOddsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(mut self, sport: Sport, events: Vec<RawEvent>) -> Self {
        self.events.insert(sport, events);
        self
    }

    /// Number of `fetch_odds` calls served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl OddsSource for StaticOddsSource {
    async fn fetch_odds(&self, sport: &Sport) -> Vec<RawEvent> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.events.get(sport).cloned().unwrap_or_default()
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// A sink that keeps every recorded opportunity.
///
/// Clones share the same storage, so a test can keep a handle while the
/// scanner owns the sink.
#[derive(Clone, Default)]
pub struct MemorySink {
    recorded: Arc<Mutex<Vec<Opportunity>>>,
    fail: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every `record` call fails with an IO error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Snapshot of what has been recorded.
    pub fn recorded(&self) -> Vec<Opportunity> {
        self.recorded
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl OpportunitySink for MemorySink {
    fn record(&mut self, opportunity: &Opportunity) -> Result<()> {
        if self.fail {
            return Err(Error::Io(std::io::Error::other("sink unavailable")));
        }
        if let Ok(mut guard) = self.recorded.lock() {
            guard.push(opportunity.clone());
        }
        Ok(())
    }
}
