pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

pub use crate::core::QuoteError;
pub use crate::providers::currencylayer::{
    DEFAULT_BASE_URL, QuoteClient, QuoteCollection, RequestConfig,
};

pub enum AppCommand {
    Live,
    Quote(String),
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("currencylayer starting...");

    let config = match config_path {
        Some(path) => crate::core::config::AppConfig::load_from_path(path)?,
        None => crate::core::config::AppConfig::load()?,
    };
    debug!(
        currencies = ?config.currencies,
        source = %config.source,
        base_url = ?config.base_url,
        "Loaded config"
    );

    let client = config.to_client();
    match command {
        AppCommand::Live => cli::live::run(&client, config.base_url()).await,
        AppCommand::Quote(pair) => cli::quote::run(&client, config.base_url(), &pair).await,
    }
}
