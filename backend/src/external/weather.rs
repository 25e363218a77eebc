//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap for city-based current conditions and the
//! 5-day/3-hour forecast, reduced here to one entry per day.

use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use shared::models::{daily_at_noon, CurrentWeather, DailyForecast, ForecastEntry};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: OWMWind,
    dt: i64,
    sys: OWMSys,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMSys {
    sunrise: i64,
    sunset: i64,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    city: OWMCity,
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMMain,
    weather: Vec<OWMWeather>,
    pop: f64,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions for a city
    pub async fn get_current_weather(&self, city: &str) -> AppResult<CurrentWeather> {
        let url = format!(
            "{}/weather?q={}&units=metric&appid={}",
            self.base_url, city, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| AppError::WeatherServiceUnavailable)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMCurrentResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })?;

        Ok(Self::convert_current_response(data))
    }

    /// Fetch the daily forecast for a city (at most 7 days)
    pub async fn get_forecast(&self, city: &str) -> AppResult<DailyForecast> {
        let url = format!(
            "{}/forecast?q={}&units=metric&appid={}",
            self.base_url, city, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| AppError::WeatherServiceUnavailable)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API error: {} - {}",
                status, body
            )));
        }

        let data: OWMForecastResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse forecast response: {}", e))
        })?;

        Ok(Self::convert_forecast_response(data))
    }

    /// Convert OpenWeatherMap current response to our format
    fn convert_current_response(data: OWMCurrentResponse) -> CurrentWeather {
        let weather = data.weather.first();

        CurrentWeather {
            city: data.name,
            timestamp: DateTime::from_timestamp(data.dt, 0).unwrap_or_else(Utc::now),
            temperature_celsius: Decimal::from_f64_retain(data.main.temp).unwrap_or_default(),
            feels_like_celsius: Decimal::from_f64_retain(data.main.feels_like).unwrap_or_default(),
            humidity_percent: data.main.humidity,
            wind_speed_mps: Decimal::from_f64_retain(data.wind.speed).unwrap_or_default(),
            condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
            description: weather.map(|w| w.description.clone()).unwrap_or_default(),
            icon: weather.map(|w| w.icon.clone()).unwrap_or_default(),
            sunrise: DateTime::from_timestamp(data.sys.sunrise, 0).unwrap_or_else(Utc::now),
            sunset: DateTime::from_timestamp(data.sys.sunset, 0).unwrap_or_else(Utc::now),
        }
    }

    /// Convert OpenWeatherMap forecast response to our format
    fn convert_forecast_response(data: OWMForecastResponse) -> DailyForecast {
        let entries = data
            .list
            .into_iter()
            .map(|item| {
                let weather = item.weather.first();
                ForecastEntry {
                    timestamp: DateTime::from_timestamp(item.dt, 0).unwrap_or_else(Utc::now),
                    temperature_celsius: Decimal::from_f64_retain(item.main.temp)
                        .unwrap_or_default(),
                    temp_min_celsius: Decimal::from_f64_retain(item.main.temp_min)
                        .unwrap_or_default(),
                    temp_max_celsius: Decimal::from_f64_retain(item.main.temp_max)
                        .unwrap_or_default(),
                    humidity_percent: item.main.humidity,
                    condition: weather.map(|w| w.main.clone()).unwrap_or_default(),
                    description: weather.map(|w| w.description.clone()).unwrap_or_default(),
                    icon: weather.map(|w| w.icon.clone()).unwrap_or_default(),
                    pop: Decimal::from_f64_retain(item.pop).unwrap_or_default(),
                }
            })
            .collect();

        DailyForecast {
            city: data.city.name,
            days: daily_at_noon(entries),
        }
    }
}
