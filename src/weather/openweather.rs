use super::types::*;
use crate::config::Config;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenWeatherError {
    #[error("Upstream returned HTTP {0}")]
    Status(StatusCode),
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),
}

impl OpenWeatherError {
    /// True when the provider answered, but with an error status.
    pub fn is_upstream_status(&self) -> bool {
        matches!(self, OpenWeatherError::Status(_))
    }
}

pub struct OpenWeatherClient {
    client: Client,
    url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(config: &Config) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .user_agent("WeatherProxy/1.0")
            .build()?;

        Ok(Self {
            client,
            url: config.current_weather_url(),
            api_key: config.openweather_api_key.clone(),
        })
    }

    /// Single attempt against the current-weather endpoint; no retry.
    pub async fn current_weather(
        &self,
        city: &str,
    ) -> Result<CurrentWeatherResponse, OpenWeatherError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(OpenWeatherError::Status(status));
        }

        let json: Value = response.json().await?;
        let current: CurrentWeatherResponse = serde_json::from_value(json)?;
        Ok(current)
    }
}
