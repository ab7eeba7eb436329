//! Currency conversion on top of an [`ExchangeRateProvider`].

use anyhow::{Result, bail};
use chrono::NaiveDate;
use tracing::debug;

use super::codes::{self, normalize_code};
use super::currency::{ExchangeRateProvider, RateQuote};

/// Outcome of converting one amount between two currencies.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    pub converted_amount: f64,
    pub rate: f64,
    pub as_of: NaiveDate,
    pub from_symbol: Option<&'static str>,
    pub to_symbol: Option<&'static str>,
}

impl ConversionResult {
    /// Formats the converted amount with the target symbol, falling back to the code.
    pub fn display_converted(&self) -> String {
        match self.to_symbol {
            Some(symbol) => format!("{symbol}{:.2}", self.converted_amount),
            None => format!("{:.2} {}", self.converted_amount, self.to_currency),
        }
    }

    pub fn display_amount(&self) -> String {
        match self.from_symbol {
            Some(symbol) => format!("{symbol}{:.2}", self.amount),
            None => format!("{:.2} {}", self.amount, self.from_currency),
        }
    }
}

pub struct CurrencyConverter<P: ExchangeRateProvider> {
    provider: P,
}

impl<P: ExchangeRateProvider> CurrencyConverter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn validate_currency_code(&self, code: &str) -> bool {
        codes::validate_currency_code(code)
    }

    /// Returns display symbols for both codes, failing on the first unknown code.
    pub fn get_symbols(
        &self,
        from: &str,
        to: &str,
    ) -> Result<(Option<&'static str>, Option<&'static str>)> {
        ensure_known(from)?;
        ensure_known(to)?;
        Ok((codes::currency_symbol(from), codes::currency_symbol(to)))
    }

    /// Validates both codes, then asks the provider for a quote exactly once.
    pub async fn get_exchange_rate(&self, from: &str, to: &str) -> Result<RateQuote> {
        ensure_known(from)?;
        ensure_known(to)?;
        self.provider
            .get_rate(&normalize_code(from), &normalize_code(to))
            .await
    }

    pub async fn convert_currency(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionResult> {
        let amount = validate_amount(amount)?;
        let (from_symbol, to_symbol) = self.get_symbols(from, to)?;
        let quote = self.get_exchange_rate(from, to).await?;
        let converted_amount = amount * quote.rate;
        debug!(
            amount,
            rate = quote.rate,
            converted_amount,
            "Converted {} to {}",
            from,
            to
        );

        Ok(ConversionResult {
            from_currency: normalize_code(from),
            to_currency: normalize_code(to),
            amount,
            converted_amount,
            rate: quote.rate,
            as_of: quote.as_of,
            from_symbol,
            to_symbol,
        })
    }
}

/// Rejects negative and non-finite amounts. Negative zero becomes `0.0`.
pub fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        bail!("Invalid amount: {amount}");
    }
    Ok(if amount == 0.0 { 0.0 } else { amount })
}

fn ensure_known(code: &str) -> Result<()> {
    if !codes::validate_currency_code(code) {
        bail!("Invalid currency code: {code}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockRateProvider {
        rate: Option<f64>,
        call_count: AtomicUsize,
    }

    impl MockRateProvider {
        fn with_rate(rate: f64) -> Self {
            Self {
                rate: Some(rate),
                call_count: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                rate: None,
                call_count: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl<'a> ExchangeRateProvider for &'a MockRateProvider {
        async fn get_rate(&self, from: &str, to: &str) -> Result<RateQuote> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            assert_eq!(from, from.to_uppercase());
            assert_eq!(to, to.to_uppercase());
            match self.rate {
                Some(rate) => Ok(RateQuote {
                    rate,
                    as_of: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                }),
                None => Err(anyhow!("API request failed with status code: 500")),
            }
        }
    }

    #[tokio::test]
    async fn test_convert_currency() {
        let provider = MockRateProvider::with_rate(1.5);
        let converter = CurrencyConverter::new(&provider);

        let result = converter.convert_currency(100.0, "USD", "EUR").await.unwrap();
        assert_eq!(result.converted_amount, 150.0);
        assert_eq!(result.rate, 1.5);
        assert_eq!(result.as_of, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(result.from_symbol, Some("$"));
        assert_eq!(result.to_symbol, Some("€"));
        assert_eq!(result.display_converted(), "€150.00");
        assert_eq!(provider.call_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_convert_normalizes_codes() {
        let provider = MockRateProvider::with_rate(2.0);
        let converter = CurrencyConverter::new(&provider);

        let result = converter.convert_currency(10.0, " usd", "gbp ").await.unwrap();
        assert_eq!(result.from_currency, "USD");
        assert_eq!(result.to_currency, "GBP");
        assert_eq!(result.converted_amount, 20.0);
    }

    #[tokio::test]
    async fn test_zero_amount_is_allowed() {
        let provider = MockRateProvider::with_rate(1.5);
        let converter = CurrencyConverter::new(&provider);

        let result = converter.convert_currency(0.0, "USD", "EUR").await.unwrap();
        assert_eq!(result.converted_amount, 0.0);
    }

    #[tokio::test]
    async fn test_negative_zero_amount_is_normalized() {
        let provider = MockRateProvider::with_rate(1.5);
        let converter = CurrencyConverter::new(&provider);

        let result = converter.convert_currency(-0.0, "USD", "EUR").await.unwrap();
        assert!(result.amount.is_sign_positive());
        assert!(result.converted_amount.is_sign_positive());
        assert_eq!(result.display_amount(), "$0.00");
        assert_eq!(result.display_converted(), "€0.00");
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(12.5).unwrap(), 12.5);
        assert!(validate_amount(-0.0).unwrap().is_sign_positive());
        assert!(validate_amount(-0.01).is_err());
        assert!(validate_amount(f64::NEG_INFINITY).is_err());
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let provider = MockRateProvider::failing();
        let converter = CurrencyConverter::new(&provider);

        let result = converter.convert_currency(100.0, "USD", "EUR").await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "API request failed with status code: 500"
        );
    }

    #[tokio::test]
    async fn test_invalid_input_skips_provider() {
        let provider = MockRateProvider::with_rate(1.5);
        let converter = CurrencyConverter::new(&provider);

        let err = converter
            .convert_currency(100.0, "XXX", "EUR")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid currency code: XXX");

        let err = converter
            .convert_currency(100.0, "USD", "ABC")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid currency code: ABC");

        assert!(converter.convert_currency(-1.0, "USD", "EUR").await.is_err());
        assert!(
            converter
                .convert_currency(f64::NAN, "USD", "EUR")
                .await
                .is_err()
        );
        assert!(
            converter
                .convert_currency(f64::INFINITY, "USD", "EUR")
                .await
                .is_err()
        );
        assert_eq!(provider.call_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_get_symbols() {
        let provider = MockRateProvider::with_rate(1.0);
        let converter = CurrencyConverter::new(&provider);

        assert_eq!(
            converter.get_symbols("usd", "inr").unwrap(),
            (Some("$"), Some("₹"))
        );
        assert!(converter.get_symbols("USD", "XXX").is_err());
        assert!(converter.validate_currency_code("USD"));
        assert!(!converter.validate_currency_code("XXX"));
    }
}
