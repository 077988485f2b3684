//! Command-line interface definitions.
//!
//! Defines the CLI structure for smartbet using `clap`. Scan flags override
//! the matching values from the configuration file for a single run.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::domain::Sport;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Sportsbook arbitrage finder
#[derive(Parser, Debug)]
#[command(name = "smartbet")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch odds and report arbitrage opportunities
    Scan(ScanArgs),

    /// List the built-in sports and their provider keys
    Sports,

    /// Explain how two-way arbitrage and stake splitting work
    Explain,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `smartbet config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value = DEFAULT_CONFIG)]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `scan` subcommand.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Total amount split across both legs [default: 100]
    #[arg(long)]
    pub bankroll: Option<Decimal>,

    /// Number of opportunities to show [default: 5]
    #[arg(long)]
    pub top: Option<usize>,

    /// Sport key to scan; repeat for several (defaults to the full catalog)
    #[arg(long = "sport", value_name = "KEY")]
    pub sports: Vec<Sport>,

    /// Minimum guaranteed profit to report [default: 0]
    #[arg(long)]
    pub min_profit: Option<Decimal>,

    /// Show the implied probability and payout math for each opportunity
    #[arg(short, long)]
    pub verbose: bool,

    /// List events that were skipped or had no arbitrage
    #[arg(long)]
    pub show_skips: bool,

    /// Do not append opportunities to the CSV log
    #[arg(long)]
    pub no_csv: bool,

    /// Log level filter (e.g. warn, info, debug)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_command_factory_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name_and_version() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "smartbet");
        assert!(cmd.get_version().is_some());
    }

    #[test]
    fn test_scan_defaults() {
        let cli = Cli::try_parse_from(["smartbet", "scan"]).unwrap();
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };

        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert!(args.bankroll.is_none());
        assert!(args.top.is_none());
        assert!(args.sports.is_empty());
        assert!(!args.verbose);
        assert!(!args.no_csv);
    }

    #[test]
    fn test_scan_overrides() {
        let cli = Cli::try_parse_from([
            "smartbet",
            "scan",
            "--bankroll",
            "250",
            "--top",
            "3",
            "--sport",
            "basketball_nba",
            "--sport",
            "icehockey_nhl",
            "--min-profit",
            "1.5",
            "--verbose",
            "--show-skips",
            "--no-csv",
        ])
        .unwrap();
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };

        assert_eq!(args.bankroll, Some(dec!(250)));
        assert_eq!(args.top, Some(3));
        assert_eq!(
            args.sports,
            vec![Sport::Nba, Sport::Other("icehockey_nhl".into())]
        );
        assert_eq!(args.min_profit, Some(dec!(1.5)));
        assert!(args.verbose);
        assert!(args.show_skips);
        assert!(args.no_csv);
    }

    #[test]
    fn test_scan_rejects_non_numeric_bankroll() {
        assert!(Cli::try_parse_from(["smartbet", "scan", "--bankroll", "lots"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["smartbet", "sports", "--json", "--color", "never"]).unwrap();

        assert!(cli.json);
        assert!(matches!(cli.color, ColorChoice::Never));
        assert!(matches!(cli.command, Commands::Sports));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["smartbet", "config", "init", "out.toml", "--force"]).unwrap();
        let Commands::Config(ConfigCommand::Init(args)) = cli.command else {
            panic!("expected config init");
        };

        assert_eq!(args.path, PathBuf::from("out.toml"));
        assert!(args.force);
    }

    #[test]
    fn test_color_choice_default_is_auto() {
        assert!(matches!(ColorChoice::default(), ColorChoice::Auto));
    }
}
