//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::command::DEFAULT_CONFIG;
use crate::adapter::inbound::cli::output;
use crate::app::{Config, API_KEY_ENV};
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Set the {API_KEY_ENV} environment variable"));
    output::note(&format!("3. Run: smartbet scan -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = if path == Path::new(DEFAULT_CONFIG) {
        Config::load_or_default(path)?
    } else {
        Config::load(path)?
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "odds_api": {
                "base_url": config.odds_api.base_url,
                "region": config.odds_api.region,
                "market": config.odds_api.market,
                "timeout_ms": config.odds_api.timeout_ms,
                "api_key_loaded": config.odds_api.api_key.is_some(),
            },
            "scan": {
                "bankroll": config.scan.bankroll,
                "min_profit": config.scan.min_profit,
                "top": config.scan.top,
                "sports": config.scan.sports,
                "market_shape": config.scan.market_shape.as_str(),
            },
            "csv_log": {
                "enabled": config.csv_log.enabled,
                "path": config.csv_log.path,
            },
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("File", path.display());

    output::section("Odds API");
    output::field("Base URL", &config.odds_api.base_url);
    output::field("Region", &config.odds_api.region);
    output::field("Market", &config.odds_api.market);
    output::field("Timeout", format!("{}ms", config.odds_api.timeout_ms));
    if config.odds_api.api_key.is_some() {
        output::success(&format!("API key loaded from {API_KEY_ENV}"));
    } else {
        output::warning(&format!("{API_KEY_ENV} not set"));
    }

    output::section("Scan");
    output::field("Bankroll", config.scan.bankroll);
    output::field("Min profit", config.scan.min_profit);
    output::field("Top", config.scan.top);
    let sports: Vec<&str> = config.scan.sports.iter().map(|sport| sport.key()).collect();
    output::field("Sports", sports.join(", "));
    output::field("Market shape", config.scan.market_shape.as_str());

    output::section("CSV Log");
    output::field(
        "Enabled",
        if config.csv_log.enabled { "yes" } else { "no" },
    );
    output::field("Path", config.csv_log.path.display());

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        let config = Config::parse(CONFIG_TEMPLATE).unwrap();

        assert_eq!(config.odds_api.market, "h2h");
        assert_eq!(config.scan.top, 5);
        assert_eq!(config.scan.sports.len(), 6);
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# mine").unwrap();

        assert!(execute_init(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        execute_init(&path, true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
    }

    #[test]
    fn init_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/config.toml");

        execute_init(&path, false).unwrap();

        assert!(path.exists());
    }
}
