use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub openweather_api_key: String,
    pub openweather_base_url: String,
    pub openweather_current_path: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            openweather_api_key: env::var("OPENWEATHER_API_KEY")
                .map_err(|_| anyhow::anyhow!("OPENWEATHER_API_KEY not set"))?,
            openweather_base_url: env::var("OPENWEATHER_BASE_URL")
                .unwrap_or_else(|_| "https://api.openweathermap.org".to_string()),
            openweather_current_path: env::var("OPENWEATHER_CURRENT_PATH")
                .unwrap_or_else(|_| "/data/2.5/weather".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        })
    }

    /// Full URL of the provider's current-weather endpoint.
    pub fn current_weather_url(&self) -> String {
        format!(
            "{}{}",
            self.openweather_base_url.trim_end_matches('/'),
            self.openweather_current_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_weather_url_joins_base_and_path() {
        let config = Config {
            openweather_api_key: "key".to_string(),
            openweather_base_url: "http://localhost:1234/".to_string(),
            openweather_current_path: "/data/2.5/weather".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
        };

        assert_eq!(
            config.current_weather_url(),
            "http://localhost:1234/data/2.5/weather"
        );
    }
}
