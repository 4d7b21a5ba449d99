//! Remote Data Gateway.
//!
//! `Transport` is the only seam that touches the network: it performs a GET
//! and hands back the body of a 2xx response. `Gateway` layers the WeatherHub
//! endpoints and JSON decoding on top of any transport. There are no retries
//! and no timeouts; a hung request hangs the caller.

use crate::config::{ApiConfig, DEFAULT_HISTORY_LIMIT};
use crate::error::{GatewayError, Result};
use crate::model::{
    HealthReport, PlanHistoryEntry, PlanSnapshot, WeatherHistoryEntry, WeatherSnapshot,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Request paths, relative to the API base URL.
pub mod paths {
    pub const HEALTH: &str = "/health";

    pub fn weather(city: &str) -> String {
        format!("/api/weather?city={}", urlencoding::encode(city))
    }

    pub fn plan(city: &str) -> String {
        format!("/api/plan?city={}", urlencoding::encode(city))
    }

    pub fn weather_history(limit: usize) -> String {
        format!("/api/history/weather?limit={}", limit)
    }

    pub fn plan_history(limit: usize) -> String {
        format!("/api/history/plans?limit={}", limit)
    }
}

/// Performs a GET against the API and returns the body of a successful response.
///
/// Non-2xx responses fail with [`GatewayError::Status`]; requests that never
/// produce a response fail with [`GatewayError::Transport`].
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<String>;
}

/// reqwest-backed transport. Works natively and on `wasm32` (browser fetch).
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            log::warn!("Request to {} failed: {}", url, e);
            GatewayError::from(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            log::warn!("Bad response for {}: {}", url, status);
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

/// Typed access to the WeatherHub endpoints.
#[derive(Clone, Debug)]
pub struct Gateway<T> {
    transport: T,
    history_limit: usize,
}

impl Gateway<HttpTransport> {
    /// Build an HTTP gateway from configuration.
    pub fn from_config(config: &ApiConfig) -> Self {
        Gateway::new(HttpTransport::new(&config.base_url)).with_history_limit(config.history_limit)
    }
}

impl<T: Transport> Gateway<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Number of history entries requested per list.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get_json<D: DeserializeOwned>(&self, path: &str) -> Result<D> {
        let body = self.transport.get(path).await?;
        serde_json::from_str(&body).map_err(|e| {
            log::warn!("Undecodable response for {}: {}", path, e);
            GatewayError::Decode(e.to_string())
        })
    }

    pub async fn health(&self) -> Result<HealthReport> {
        self.get_json(paths::HEALTH).await
    }

    pub async fn weather(&self, city: &str) -> Result<WeatherSnapshot> {
        self.get_json(&paths::weather(city)).await
    }

    pub async fn plan(&self, city: &str) -> Result<PlanSnapshot> {
        self.get_json(&paths::plan(city)).await
    }

    pub async fn weather_history(&self) -> Result<Vec<WeatherHistoryEntry>> {
        self.get_json(&paths::weather_history(self.history_limit)).await
    }

    pub async fn plan_history(&self) -> Result<Vec<PlanHistoryEntry>> {
        self.get_json(&paths::plan_history(self.history_limit)).await
    }
}

#[cfg(test)]
mod tests {
    use super::paths;

    #[test]
    fn test_city_is_percent_encoded() {
        assert_eq!(paths::weather("Paris"), "/api/weather?city=Paris");
        assert_eq!(paths::weather("New York"), "/api/weather?city=New%20York");
        assert_eq!(paths::plan("São Paulo"), "/api/plan?city=S%C3%A3o%20Paulo");
    }

    #[test]
    fn test_history_paths_carry_limit() {
        assert_eq!(paths::weather_history(20), "/api/history/weather?limit=20");
        assert_eq!(paths::plan_history(5), "/api/history/plans?limit=5");
    }
}
