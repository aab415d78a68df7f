//! HTTP clients for aprs.fi and the Avalanche Canada forecast API
//!
//! Each call is a single attempt; failures are reported to the caller as-is.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::types::{ForecastProduct, ForecastReport, LocationReply};

const USER_AGENT: &str = concat!("avcan-backend/", env!("CARGO_PKG_VERSION"));

/// Station position lookup by callsign.
#[async_trait]
pub trait LocationService: Send + Sync {
    async fn get_location(&self, api_key: &str, callsign: &str) -> Result<LocationReply>;
}

/// Avalanche forecast lookup by coordinates.
#[async_trait]
pub trait ForecastService: Send + Sync {
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastReport>;
}

fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}

/// Parse an aprs.fi reply body, turning `"result": "fail"` into an error.
pub fn parse_location_reply(json: &str) -> Result<LocationReply> {
    let reply: LocationReply =
        serde_json::from_str(json).context("Failed to deserialize aprs.fi reply")?;

    if reply.is_failure() {
        anyhow::bail!(
            "aprs.fi lookup failed: {}",
            reply.description.as_deref().unwrap_or("no description")
        );
    }
    Ok(reply)
}

/// Parse a forecast point product; a product without a report yields an empty one.
pub fn parse_forecast_product(json: &str) -> Result<ForecastReport> {
    let product: ForecastProduct =
        serde_json::from_str(json).context("Failed to deserialize forecast product")?;

    if product.report.is_none() {
        tracing::debug!("Forecast product {:?} has no report", product.id);
    }
    Ok(product.report.unwrap_or_default())
}

async fn get_body(client: &Client, url: &str, service: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", service))?;

    if !response.status().is_success() {
        anyhow::bail!("HTTP error {} from {}", response.status(), service);
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read {} response body", service))
}

/// aprs.fi `get` API client
pub struct AprsFiClient {
    client: Client,
    base_url: String,
}

impl AprsFiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    fn location_url(&self, api_key: &str, callsign: &str) -> String {
        format!(
            "{}/api/get?what=loc&apikey={}&format=json&name={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(api_key),
            urlencoding::encode(callsign)
        )
    }
}

#[async_trait]
impl LocationService for AprsFiClient {
    async fn get_location(&self, api_key: &str, callsign: &str) -> Result<LocationReply> {
        // The URL carries the API key, so only the callsign is logged.
        tracing::debug!("Fetching aprs.fi location for {}", callsign);

        let body = get_body(&self.client, &self.location_url(api_key, callsign), "aprs.fi").await?;
        parse_location_reply(&body)
    }
}

/// Avalanche Canada forecast API client
pub struct AvcanClient {
    client: Client,
    base_url: String,
    language: String,
}

impl AvcanClient {
    pub fn new(base_url: impl Into<String>, language: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into(),
            language: language.into(),
        })
    }

    fn point_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/forecasts/{}/products/point?lat={}&long={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.language),
            latitude,
            longitude
        )
    }
}

#[async_trait]
impl ForecastService for AvcanClient {
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastReport> {
        let url = self.point_url(latitude, longitude);
        tracing::debug!("Fetching avalanche forecast from {}", url);

        let body = get_body(&self.client, &url, "avalanche.ca").await?;
        parse_forecast_product(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_url_encodes_parts() {
        let client = AprsFiClient::new("https://api.aprs.fi/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.location_url("123.abc", "KI7ABC-9"),
            "https://api.aprs.fi/api/get?what=loc&apikey=123.abc&format=json&name=KI7ABC-9"
        );
        assert!(client.location_url("k", "A B").ends_with("name=A%20B"));
    }

    #[test]
    fn test_point_url() {
        let client = AvcanClient::new("https://api.avalanche.ca", "en", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.point_url(51.1, -115.5),
            "https://api.avalanche.ca/forecasts/en/products/point?lat=51.1&long=-115.5"
        );
    }

    #[test]
    fn test_parse_location_reply_fail_result() {
        let err = parse_location_reply(r#"{"result":"fail","description":"unknown api key"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown api key"));

        assert!(parse_location_reply("<html>502</html>").is_err());

        let ok = parse_location_reply(r#"{"result":"ok","found":0,"entries":[]}"#).unwrap();
        assert!(ok.entries.is_empty());
    }

    #[test]
    fn test_parse_forecast_product() {
        let json = r#"{
            "id": "a1b2",
            "report": {
                "highlights": "<p>Storm slabs.</p>",
                "dangerRatings": [],
                "summaries": null
            }
        }"#;
        let report = parse_forecast_product(json).unwrap();
        assert_eq!(report.highlights.as_deref(), Some("<p>Storm slabs.</p>"));

        let empty = parse_forecast_product("{}").unwrap();
        assert!(empty.highlights.is_none());

        assert!(parse_forecast_product("not json").is_err());
    }

    #[tokio::test]
    #[ignore] // Requires network connection
    async fn test_live_forecast() {
        let client = AvcanClient::new("https://api.avalanche.ca", "en", Duration::from_secs(30)).unwrap();
        let result = client.get_forecast(51.1, -115.5).await;
        assert!(result.is_ok());
    }
}
