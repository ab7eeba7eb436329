pub mod cli;
pub mod core;
pub mod providers;
pub mod web;

use crate::core::config::AppConfig;
use crate::core::converter::CurrencyConverter;
use crate::core::currency::ExchangeRateProvider;
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Serve { bind: Option<String> },
    Convert { amount: f64, from: String, to: String },
    Table,
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!(
        mode = %config.mode,
        bind = %config.server.bind,
        base_url = %config.providers.currencyapi.base_url,
        "Loaded config"
    );
    Ok(config)
}

fn rate_provider(config: &AppConfig) -> Result<Arc<dyn ExchangeRateProvider>> {
    let api = &config.providers.currencyapi;
    let api_key = api.api_key()?;
    Ok(Arc::new(providers::currencyapi::CurrencyApiProvider::new(
        &api.base_url,
        &api_key,
    )))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    run_with_config(command, config).await
}

pub async fn run_with_config(command: AppCommand, config: AppConfig) -> Result<()> {
    match command {
        AppCommand::Serve { bind } => {
            info!(mode = %config.mode, "Currency converter starting...");
            let state = web::AppState::new(rate_provider(&config)?);
            let bind = bind.unwrap_or(config.server.bind);
            web::serve(state, &bind).await
        }
        AppCommand::Convert { amount, from, to } => {
            let converter = CurrencyConverter::new(rate_provider(&config)?);
            cli::convert::run(&converter, amount, &from, &to).await
        }
        AppCommand::Table => {
            cli::table::run();
            Ok(())
        }
    }
}
