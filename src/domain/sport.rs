//! Sport catalog.
//!
//! Sport keys are opaque to the arbitrage engine: they are passed to the odds
//! source and copied into each opportunity's description. The catalog only
//! adds display labels and the default scan set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A sport identifier understood by the odds provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sport {
    Nba,
    Nfl,
    Epl,
    Mlb,
    Mma,
    Ncaab,
    /// A key outside the built-in catalog, passed through untouched.
    Other(String),
}

impl Sport {
    /// The built-in catalog, in default scan order.
    pub const CATALOG: [Sport; 6] = [
        Sport::Nba,
        Sport::Nfl,
        Sport::Epl,
        Sport::Mlb,
        Sport::Mma,
        Sport::Ncaab,
    ];

    /// Provider key, e.g. `basketball_nba`.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Nba => "basketball_nba",
            Self::Nfl => "americanfootball_nfl",
            Self::Epl => "soccer_epl",
            Self::Mlb => "baseball_mlb",
            Self::Mma => "mma_mixed_martial_arts",
            Self::Ncaab => "basketball_ncaab",
            Self::Other(key) => key,
        }
    }

    /// Human-readable league name.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Nba => "NBA",
            Self::Nfl => "NFL",
            Self::Epl => "EPL",
            Self::Mlb => "MLB",
            Self::Mma => "MMA",
            Self::Ncaab => "NCAAB",
            Self::Other(key) => key,
        }
    }

    /// Label used as the prefix of opportunity descriptions (upper-cased key).
    #[must_use]
    pub fn description_label(&self) -> String {
        self.key().to_uppercase()
    }

    /// Whether the key belongs to the built-in catalog.
    #[must_use]
    pub fn is_cataloged(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Sport {
    fn from(key: &str) -> Self {
        Self::CATALOG
            .iter()
            .find(|sport| sport.key() == key)
            .cloned()
            .unwrap_or_else(|| Self::Other(key.to_string()))
    }
}

impl From<String> for Sport {
    fn from(key: String) -> Self {
        Self::from(key.as_str())
    }
}

impl From<Sport> for String {
    fn from(sport: Sport) -> Self {
        sport.key().to_string()
    }
}

impl FromStr for Sport {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.trim()))
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keys_round_trip() {
        for sport in Sport::CATALOG {
            assert_eq!(Sport::from(sport.key()), sport);
        }
    }

    #[test]
    fn unknown_key_passes_through() {
        let sport: Sport = "icehockey_nhl".parse().unwrap();
        assert_eq!(sport, Sport::Other("icehockey_nhl".into()));
        assert_eq!(sport.key(), "icehockey_nhl");
        assert!(!sport.is_cataloged());
    }

    #[test]
    fn description_label_is_upper_cased_key() {
        assert_eq!(Sport::Nba.description_label(), "BASKETBALL_NBA");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let sports: Vec<Sport> = serde_json::from_str(r#"["soccer_epl", "cricket_ipl"]"#).unwrap();
        assert_eq!(sports, vec![Sport::Epl, Sport::Other("cricket_ipl".into())]);
    }
}
