//! HTTP front end: a form, a currency table and the conversion result page.

pub mod handlers;
pub mod pages;

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tracing::info;

use crate::core::converter::CurrencyConverter;
use crate::core::currency::ExchangeRateProvider;

pub type SharedConverter = Arc<CurrencyConverter<Arc<dyn ExchangeRateProvider>>>;

#[derive(Clone)]
pub struct AppState {
    pub converter: SharedConverter,
}

impl AppState {
    pub fn new(provider: Arc<dyn ExchangeRateProvider>) -> Self {
        AppState {
            converter: Arc::new(CurrencyConverter::new(provider)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/table", get(handlers::table))
        .route("/conversion", post(handlers::conversion))
        .route("/convert", get(handlers::convert))
        .with_state(state)
}

pub async fn serve(state: AppState, bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .await
        .context("Web server failed")
}
