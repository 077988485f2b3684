//! REST client for `GET /v4/sports/{sport}/odds`.
//!
//! Implements [`OddsSource`]: any transport failure, non-success status or
//! undecodable body is logged and reported as an empty event list.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::{debug, warn};

use crate::app::OddsApiConfig;
use crate::domain::{RawEvent, Sport};
use crate::error::Result;
use crate::port::outbound::odds::OddsSource;

/// Odds are always requested in decimal format.
const ODDS_FORMAT: &str = "decimal";

/// HTTP client for The Odds API.
pub struct OddsApiClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
    region: String,
    market: String,
}

impl OddsApiClient {
    #[must_use]
    pub fn from_config(config: &OddsApiConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            region: config.region.clone(),
            market: config.market.clone(),
        }
    }

    /// Endpoint for one sport's odds.
    #[must_use]
    pub fn odds_url(&self, sport: &Sport) -> String {
        format!("{}/v4/sports/{}/odds", self.base_url, sport.key())
    }

    async fn get_events(&self, sport: &Sport, api_key: &str) -> Result<Vec<RawEvent>> {
        let response = self
            .http
            .get(self.odds_url(sport))
            .query(&[
                ("apiKey", api_key),
                ("regions", self.region.as_str()),
                ("markets", self.market.as_str()),
                ("oddsFormat", ODDS_FORMAT),
            ])
            .send()
            .await?
            .error_for_status()?;

        if let Some(remaining) = response
            .headers()
            .get("x-requests-remaining")
            .and_then(|value| value.to_str().ok())
        {
            debug!(sport = %sport, remaining, "Odds API quota");
        }

        let values = response.json::<Vec<Value>>().await?;
        Ok(parse_events(sport, values))
    }
}

/// Decode events one by one so a single bad record does not void the list.
fn parse_events(sport: &Sport, values: Vec<Value>) -> Vec<RawEvent> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<RawEvent>(value) {
            Ok(event) => Some(event),
            Err(err) => {
                warn!(sport = %sport, error = %err, "Dropping undecodable event");
                None
            }
        })
        .collect()
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn fetch_odds(&self, sport: &Sport) -> Vec<RawEvent> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!(sport = %sport, "No API key configured, skipping fetch");
            return Vec::new();
        };

        match self.get_events(sport, api_key).await {
            Ok(events) => {
                debug!(sport = %sport, events = events.len(), "Fetched odds");
                events
            }
            Err(err) => {
                warn!(sport = %sport, error = %err, "Odds fetch failed, treating as no events");
                Vec::new()
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "the-odds-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base_url: &str, api_key: Option<&str>) -> OddsApiClient {
        OddsApiClient::from_config(&OddsApiConfig {
            base_url: base_url.into(),
            api_key: api_key.map(String::from),
            ..OddsApiConfig::default()
        })
    }

    #[test]
    fn builds_sport_odds_url() {
        let client = client("https://api.the-odds-api.com/", Some("key"));

        assert_eq!(
            client.odds_url(&Sport::Nfl),
            "https://api.the-odds-api.com/v4/sports/americanfootball_nfl/odds"
        );
    }

    #[test]
    fn parse_keeps_events_missing_teams_and_drops_garbage() {
        let values = vec![
            json!({
                "home_team": "Arsenal",
                "away_team": "Chelsea",
                "bookmakers": []
            }),
            json!({ "home_team": "Liverpool" }),
            json!({ "home_team": "Everton", "bookmakers": "not a list" }),
        ];

        let events = parse_events(&Sport::Epl, values);

        assert_eq!(events.len(), 2);
        assert!(events[1].away_team.is_none());
    }

    #[tokio::test]
    async fn missing_api_key_yields_no_events() {
        let client = client("http://127.0.0.1:9", None);

        assert!(client.fetch_odds(&Sport::Nba).await.is_empty());
    }

    #[tokio::test]
    async fn unreachable_provider_yields_no_events() {
        let client = client("http://127.0.0.1:9", Some("key"));

        assert!(client.fetch_odds(&Sport::Nba).await.is_empty());
    }
}
