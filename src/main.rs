use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use currencylayer::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display all live quotes
    Live,
    /// Display the live rate of a single currency pair, e.g. USDKES
    Quote { pair: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => currencylayer::cli::setup::setup(),
        Some(Commands::Live) => {
            currencylayer::run_command(currencylayer::AppCommand::Live, cli.config_path.as_deref())
                .await
        }
        Some(Commands::Quote { pair }) => {
            currencylayer::run_command(
                currencylayer::AppCommand::Quote(pair),
                cli.config_path.as_deref(),
            )
            .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
