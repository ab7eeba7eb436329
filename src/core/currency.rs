//! Exchange rate abstractions

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// A single quoted rate for a currency pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateQuote {
    /// Units of the target currency for one unit of the source currency.
    pub rate: f64,
    /// Date the upstream provider last refreshed the rate.
    pub as_of: NaiveDate,
}

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn get_rate(&self, from: &str, to: &str) -> Result<RateQuote>;
}

#[async_trait]
impl<T: ExchangeRateProvider + ?Sized> ExchangeRateProvider for Arc<T> {
    async fn get_rate(&self, from: &str, to: &str) -> Result<RateQuote> {
        (**self).get_rate(from, to).await
    }
}
