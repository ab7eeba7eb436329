use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::currency::{ExchangeRateProvider, RateQuote};

pub const DEFAULT_BASE_URL: &str = "https://api.currencyapi.com";

/// Parses the provider's `last_updated_at` value into a calendar date.
///
/// Accepts RFC 3339 (`2023-06-23T10:15:59Z` or with an offset), a naive ISO
/// date-time, or a bare date. The date is taken in the timestamp's own offset.
pub fn parse_as_of(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Ok(dt.date());
    }
    raw.parse::<NaiveDate>()
        .map_err(|e| anyhow!("Invalid last_updated_at '{}': {}", raw, e))
}

// currencyapi.com `/v3/latest`
#[derive(Debug, Deserialize)]
struct LatestResponse {
    meta: Option<LatestMeta>,
    data: Option<HashMap<String, RateEntry>>,
}

#[derive(Debug, Deserialize)]
struct LatestMeta {
    last_updated_at: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RateEntry {
    value: Option<f64>,
    last_updated_at: Option<Value>,
}

pub struct CurrencyApiProvider {
    base_url: String,
    api_key: String,
}

impl CurrencyApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        CurrencyApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn latest_url(&self, from: &str, to: &str) -> Result<Url> {
        let endpoint = format!("{}/v3/latest", self.base_url);
        Url::parse_with_params(
            &endpoint,
            &[
                ("base_currency", from),
                ("currencies", to),
                ("apikey", self.api_key.as_str()),
            ],
        )
        .map_err(|e| anyhow!("Invalid currency API URL {}: {}", endpoint, e))
    }
}

#[async_trait]
impl ExchangeRateProvider for CurrencyApiProvider {
    #[instrument(name = "CurrencyApiRateFetch", skip(self), fields(from = %from, to = %to))]
    async fn get_rate(&self, from: &str, to: &str) -> Result<RateQuote> {
        let url = self.latest_url(from, to)?;
        debug!("Requesting latest rate from {}/v3/latest", self.base_url);

        let client = reqwest::Client::builder().user_agent("forex/0.1").build()?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "Request error: {} for currency pair: {}{}",
                    e.without_url(),
                    from,
                    to
                )
            })?;

        if response.status() != StatusCode::OK {
            bail!(
                "API request failed with status code: {}",
                response.status().as_u16()
            );
        }

        let text = response.text().await?;
        let data: LatestResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}{}: {}", from, to, e))?;
        debug!(response = ?data, "Received currency API response");

        let entry = data
            .data
            .and_then(|mut rates| rates.remove(to))
            .ok_or_else(|| anyhow!("Could not find exchange rate data for {} to {}", from, to))?;

        let rate = entry
            .value
            .ok_or_else(|| anyhow!("Exchange rate data is missing for {}", to))?;

        // Only string timestamps are parsed; anything else dates the quote today.
        let as_of = match data
            .meta
            .and_then(|m| m.last_updated_at)
            .or(entry.last_updated_at)
        {
            Some(Value::String(raw)) => parse_as_of(&raw)?,
            _ => Utc::now().date_naive(),
        };

        Ok(RateQuote { rate, as_of })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(status: u16, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v3/latest"))
            .and(query_param("base_currency", "USD"))
            .and(query_param("currencies", "EUR"))
            .and(query_param("apikey", "test-key"))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_rate_fetch() {
        let mock_response = r#"{
            "meta": { "last_updated_at": "2023-06-23T23:59:59Z" },
            "data": { "EUR": { "code": "EUR", "value": 0.9168 } }
        }"#;
        let mock_server = create_mock_server(200, mock_response).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        let quote = provider
            .get_rate("USD", "EUR")
            .await
            .expect("Failed to get rate");
        assert_eq!(quote.rate, 0.9168);
        assert_eq!(quote.as_of, NaiveDate::from_ymd_opt(2023, 6, 23).unwrap());
    }

    #[tokio::test]
    async fn test_rate_entry_timestamp_is_used_without_meta() {
        let mock_response = r#"{
            "data": {
                "EUR": { "value": 1.2, "last_updated_at": "2023-01-01T08:00:00+02:00" }
            }
        }"#;
        let mock_server = create_mock_server(200, mock_response).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        let quote = provider.get_rate("USD", "EUR").await.unwrap();
        assert_eq!(quote.rate, 1.2);
        assert_eq!(quote.as_of, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[tokio::test]
    async fn test_missing_timestamp_falls_back_to_today() {
        let mock_response = r#"{"data": {"EUR": {"value": 1.1}}}"#;
        let mock_server = create_mock_server(200, mock_response).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        let before = Utc::now().date_naive();
        let quote = provider.get_rate("USD", "EUR").await.unwrap();
        let after = Utc::now().date_naive();
        assert!(quote.as_of == before || quote.as_of == after);
    }

    #[tokio::test]
    async fn test_non_string_timestamp_falls_back_to_today() {
        let mock_response = r#"{
            "meta": { "last_updated_at": 1687564559 },
            "data": { "EUR": { "value": 0.92 } }
        }"#;
        let mock_server = create_mock_server(200, mock_response).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        let before = Utc::now().date_naive();
        let quote = provider.get_rate("USD", "EUR").await.unwrap();
        let after = Utc::now().date_naive();
        assert_eq!(quote.rate, 0.92);
        assert!(quote.as_of == before || quote.as_of == after);
    }

    #[tokio::test]
    async fn test_transport_error_hides_api_key() {
        // Nothing listens on the discard port.
        let provider = CurrencyApiProvider::new("http://127.0.0.1:9", "SUPERSECRETKEY");

        let err = provider.get_rate("USD", "EUR").await.unwrap_err().to_string();
        assert!(err.starts_with("Request error:"), "unexpected error: {err}");
        assert!(err.contains("USDEUR"));
        assert!(!err.contains("SUPERSECRETKEY"), "key leaked: {err}");
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let mock_server = create_mock_server(500, "").await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        let result = provider.get_rate("USD", "EUR").await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "API request failed with status code: 500"
        );
    }

    #[tokio::test]
    async fn test_non_ok_success_status_is_rejected() {
        let mock_response = r#"{"data": {"EUR": {"value": 1.1}}}"#;
        let mock_server = create_mock_server(202, mock_response).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        assert!(provider.get_rate("USD", "EUR").await.is_err());
    }

    #[tokio::test]
    async fn test_missing_rate_value() {
        let mock_response = r#"{"data": {"EUR": {"code": "EUR"}}}"#;
        let mock_server = create_mock_server(200, mock_response).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        let result = provider.get_rate("USD", "EUR").await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Exchange rate data is missing for EUR"
        );
    }

    #[tokio::test]
    async fn test_null_rate_value() {
        let mock_response = r#"{"data": {"EUR": {"code": "EUR", "value": null}}}"#;
        let mock_server = create_mock_server(200, mock_response).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        assert!(provider.get_rate("USD", "EUR").await.is_err());
    }

    #[tokio::test]
    async fn test_missing_target_currency() {
        let mock_response = r#"{"data": {"GBP": {"value": 0.8}}}"#;
        let mock_server = create_mock_server(200, mock_response).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        let result = provider.get_rate("USD", "EUR").await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Could not find exchange rate data for USD to EUR"
        );
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let mock_server = create_mock_server(200, "<html>not json</html>").await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        let result = provider.get_rate("USD", "EUR").await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response for USDEUR")
        );
    }

    #[tokio::test]
    async fn test_unparsable_timestamp() {
        let mock_response = r#"{
            "meta": { "last_updated_at": "yesterday" },
            "data": { "EUR": { "value": 0.9 } }
        }"#;
        let mock_server = create_mock_server(200, mock_response).await;
        let provider = CurrencyApiProvider::new(&mock_server.uri(), "test-key");

        let result = provider.get_rate("USD", "EUR").await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Invalid last_updated_at 'yesterday'")
        );
    }

    #[test]
    fn test_parse_as_of_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(parse_as_of("2024-03-09T10:00:00Z").unwrap(), expected);
        assert_eq!(parse_as_of("2024-03-09T10:00:00.123Z").unwrap(), expected);
        assert_eq!(parse_as_of("2024-03-09T23:30:00-05:00").unwrap(), expected);
        assert_eq!(parse_as_of("2024-03-09T10:00:00").unwrap(), expected);
        assert_eq!(parse_as_of("2024-03-09").unwrap(), expected);
        assert!(parse_as_of("09/03/2024").is_err());
    }
}
