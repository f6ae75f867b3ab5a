use super::cache::{normalize_key, WeatherCache};
use super::openweather::{OpenWeatherClient, OpenWeatherError};
use super::types::{CurrentWeatherResponse, WeatherPayload};
use crate::error::WeatherError;
use chrono::{DateTime, Utc};

/// Cache-then-fetch front for the upstream provider.
pub struct WeatherService {
    client: OpenWeatherClient,
    cache: WeatherCache,
}

impl WeatherService {
    pub fn new(client: OpenWeatherClient, cache: WeatherCache) -> Self {
        Self { client, cache }
    }

    #[cfg(test)]
    pub fn cache(&self) -> &WeatherCache {
        &self.cache
    }

    pub async fn get_weather(&self, city: &str) -> Result<WeatherPayload, WeatherError> {
        self.get_weather_at(city, Utc::now).await
    }

    /// `clock` is read once for the freshness check and again once the
    /// upstream fetch has completed, to stamp the stored entry.
    pub async fn get_weather_at(
        &self,
        city: &str,
        clock: impl Fn() -> DateTime<Utc>,
    ) -> Result<WeatherPayload, WeatherError> {
        let key = normalize_key(city);

        if let Some(entry) = self.cache.lookup(&key).await {
            if entry.is_fresh(clock()) {
                tracing::debug!("Cache hit for {}", entry.normalized_city);
                return Ok(entry.payload.as_cached());
            }
            tracing::debug!("Cache entry for {} is stale, refreshing", key);
        } else {
            tracing::debug!("Cache miss for {}", key);
        }

        let current = self
            .client
            .current_weather(city)
            .await
            .map_err(map_upstream_error)?;
        let payload = to_payload(current)?;

        self.cache.store(key, payload.clone(), clock()).await;
        Ok(payload)
    }
}

// Every upstream error status collapses into NotFound.
fn map_upstream_error(err: OpenWeatherError) -> WeatherError {
    if err.is_upstream_status() {
        tracing::warn!("Upstream weather lookup failed: {}", err);
        WeatherError::NotFound
    } else {
        tracing::error!("Weather provider unavailable: {}", err);
        WeatherError::ServiceUnavailable
    }
}

fn to_payload(current: CurrentWeatherResponse) -> Result<WeatherPayload, WeatherError> {
    let description = match current.weather.into_iter().next() {
        Some(condition) => condition.description,
        None => {
            tracing::error!("Weather provider returned no conditions for {}", current.name);
            return Err(WeatherError::ServiceUnavailable);
        }
    };

    Ok(WeatherPayload {
        city: current.name,
        temperature_celsius: current.main.temp.trunc() as i64,
        description,
        cached: false,
    })
}
