use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced to HTTP clients. The underlying cause is logged, never returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeatherError {
    #[error("City not found")]
    NotFound,
    #[error("Weather service unavailable")]
    ServiceUnavailable,
}

impl WeatherError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::NotFound => StatusCode::NOT_FOUND,
            WeatherError::ServiceUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(WeatherError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            WeatherError::ServiceUnavailable.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_into_response_renders_detail() {
        let response = WeatherError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"detail": "City not found"}));
    }
}
