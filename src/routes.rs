use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::WeatherError,
    weather::{types::WeatherPayload, WeatherService},
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IndexResponse {
    pub name: String,
    pub version: String,
}

// Route handlers
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        name: "Weather API".to_string(),
        version: "1.0".to_string(),
    })
}

pub async fn get_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherPayload>, WeatherError> {
    let payload = state.weather_service.get_weather(&city).await?;
    Ok(Json(payload))
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/weather/:city", get(get_weather))
        .with_state(state)
}
