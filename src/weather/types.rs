use serde::{Deserialize, Serialize};

/// Normalized payload returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherPayload {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Temperature")]
    pub temperature_celsius: i64,
    #[serde(rename = "Weather")]
    pub description: String,
    #[serde(default)]
    pub cached: bool,
}

impl WeatherPayload {
    pub fn as_cached(&self) -> Self {
        Self {
            cached: true,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    pub main: CurrentWeatherMain,
    pub weather: Vec<CurrentWeatherCondition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherMain {
    pub temp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeatherCondition {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_uses_wire_field_names() {
        let payload = WeatherPayload {
            city: "Paris".to_string(),
            temperature_celsius: 18,
            description: "clear sky".to_string(),
            cached: false,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "City": "Paris",
                "Temperature": 18,
                "Weather": "clear sky",
                "cached": false
            })
        );
    }

    #[test]
    fn test_current_weather_ignores_extra_fields() {
        let raw = serde_json::json!({
            "coord": {"lon": 2.35, "lat": 48.85},
            "name": "Paris",
            "main": {"temp": 18.7, "humidity": 60},
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
            "cod": 200
        });

        let parsed: CurrentWeatherResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.name, "Paris");
        assert_eq!(parsed.main.temp, 18.7);
        assert_eq!(parsed.weather[0].description, "clear sky");
    }
}
