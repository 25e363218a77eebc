//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::models::{CurrentWeather, DailyForecast};

use crate::error::AppResult;
use crate::external::weather::WeatherClient;
use crate::AppState;

/// Query parameters for weather lookups
#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: String,
}

/// Fetch current weather for a city
pub async fn fetch_current_weather(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<CurrentWeather>> {
    let client = WeatherClient::new(
        state.config.weather.api_key.clone(),
        state.config.weather.api_endpoint.clone(),
    );
    let weather = client.get_current_weather(&query.city).await?;
    Ok(Json(weather))
}

/// Fetch the daily forecast for a city
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<DailyForecast>> {
    let client = WeatherClient::new(
        state.config.weather.api_key.clone(),
        state.config.weather.api_endpoint.clone(),
    );
    let forecast = client.get_forecast(&query.city).await?;
    Ok(Json(forecast))
}
