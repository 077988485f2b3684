//! Raw odds records as delivered by the odds provider.
//!
//! Field names follow the provider's v4 JSON payload. Team fields are
//! optional here and validated once through [`RawEvent::teams`], so a
//! malformed record is rejected instead of failing deep inside the scan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::SkipReason;
use super::money::Price;

/// One sporting event with every bookmaker's quotes for the requested market.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub commence_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

/// The validated home/away pair of an event, in provider order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teams<'a> {
    pub home: &'a str,
    pub away: &'a str,
}

impl RawEvent {
    /// Validate that both team identifiers are present.
    ///
    /// # Errors
    ///
    /// Returns [`SkipReason::MalformedEvent`] naming the first missing field.
    pub fn teams(&self) -> Result<Teams<'_>, SkipReason> {
        let home = self
            .home_team
            .as_deref()
            .ok_or(SkipReason::MalformedEvent { field: "home_team" })?;
        let away = self
            .away_team
            .as_deref()
            .ok_or(SkipReason::MalformedEvent { field: "away_team" })?;
        Ok(Teams { home, away })
    }

    /// Short label for logs, tolerant of missing teams.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} vs {}",
            self.home_team.as_deref().unwrap_or("?"),
            self.away_team.as_deref().unwrap_or("?")
        )
    }
}

/// A bookmaker and the markets it quotes for one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bookmaker {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markets: Vec<Market>,
}

impl Bookmaker {
    /// Display name, falling back to the provider key when no title is sent.
    #[must_use]
    pub fn name(&self) -> &str {
        if self.title.is_empty() {
            &self.key
        } else {
            &self.title
        }
    }

    /// Outcome quotes of the requested market.
    ///
    /// Only the first market is considered; a bookmaker without markets
    /// contributes no quotes.
    #[must_use]
    pub fn quotes(&self) -> &[OutcomeQuote] {
        self.markets
            .first()
            .map(|market| market.outcomes.as_slice())
            .unwrap_or_default()
    }
}

/// One market (e.g. `h2h`) offered by a bookmaker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Market {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OutcomeQuote>,
}

/// A named outcome and its decimal price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeQuote {
    pub name: String,
    pub price: Price,
}
