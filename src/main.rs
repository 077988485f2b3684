use clap::Parser;
use smartbet::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use smartbet::adapter::inbound::cli::output::{self, OutputConfig};
use smartbet::adapter::inbound::cli::{config, explain, scan, sports};
use smartbet::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, &cli.color));

    if let Err(e) = dispatch(cli.command).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Scan(args) => scan::execute(&args).await,
        Commands::Sports => {
            sports::execute();
            Ok(())
        }
        Commands::Explain => explain::execute(),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config),
    }
}
