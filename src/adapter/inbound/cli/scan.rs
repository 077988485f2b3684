//! Handler for the `scan` command.

use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use crate::adapter::inbound::cli::command::{ScanArgs, DEFAULT_CONFIG};
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::report::{self, ReportOptions};
use crate::adapter::outbound::csv_log::CsvLog;
use crate::adapter::outbound::odds_api::OddsApiClient;
use crate::app::{Config, Scanner, API_KEY_ENV};
use crate::error::Result;
use crate::port::outbound::sink::OpportunitySink;

/// Execute `scan`.
pub async fn execute(args: &ScanArgs) -> Result<()> {
    let config = resolve_config(args)?;
    config.init_logging();

    if config.odds_api.api_key.is_none() {
        output::warning(&format!(
            "{API_KEY_ENV} is not set; the odds provider will return no events"
        ));
    }

    let scan_config = config.scan_config()?;
    let source = Arc::new(OddsApiClient::from_config(&config.odds_api));
    let scanner = Scanner::new(source, scan_config, config.scan.top);

    let mut csv_log = open_csv_log(&config, args.no_csv);

    let pb = output::spinner(&format!(
        "Scanning {} sports for arbitrage",
        config.scan.sports.len()
    ));
    let sink = csv_log.as_mut().map(|log| log as &mut dyn OpportunitySink);
    let report = scanner.run(&config.scan.sports, sink).await;
    output::spinner_success(
        &pb,
        &format!(
            "Checked {} events across {} sports",
            report.total_events(),
            report.sports.len()
        ),
    );

    report::render(
        &report,
        &ReportOptions {
            verbose: args.verbose,
            show_skips: args.show_skips,
            csv_path: csv_log.as_ref().map(CsvLog::path),
        },
    );

    Ok(())
}

/// Load the config file and apply command-line overrides.
///
/// A missing file at the default location means "use defaults"; a missing
/// file the user named explicitly is an error.
pub fn resolve_config(args: &ScanArgs) -> Result<Config> {
    let mut config = if args.config == Path::new(DEFAULT_CONFIG) {
        Config::load_or_default(&args.config)?
    } else {
        Config::load(&args.config)?
    };

    if let Some(bankroll) = args.bankroll {
        config.scan.bankroll = bankroll;
    }
    if let Some(top) = args.top {
        config.scan.top = top;
    }
    if let Some(min_profit) = args.min_profit {
        config.scan.min_profit = min_profit;
    }
    if !args.sports.is_empty() {
        config.scan.sports = args.sports.clone();
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }

    config.validate()?;
    Ok(config)
}

fn open_csv_log(config: &Config, no_csv: bool) -> Option<CsvLog> {
    if no_csv || !config.csv_log.enabled {
        return None;
    }

    match CsvLog::open(&config.csv_log.path) {
        Ok(log) => Some(log),
        Err(err) => {
            warn!(path = %config.csv_log.path.display(), error = %err, "CSV log unavailable");
            output::warning(&format!(
                "Could not open {}; opportunities will not be logged",
                config.csv_log.path.display()
            ));
            None
        }
    }
}
