//! Weather models and forecast reduction

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Forecasts are reduced to at most this many days
pub const FORECAST_DAYS: usize = 7;

/// Current weather conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city: String,
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: Decimal,
    pub feels_like_celsius: Decimal,
    pub humidity_percent: i32,
    pub wind_speed_mps: Decimal,
    pub condition: String,
    pub description: String,
    pub icon: String,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// One forecast entry (the upstream API emits these every three hours)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    pub temperature_celsius: Decimal,
    pub temp_min_celsius: Decimal,
    pub temp_max_celsius: Decimal,
    pub humidity_percent: i32,
    pub condition: String,
    pub description: String,
    pub icon: String,
    /// Probability of precipitation (0-1)
    pub pop: Decimal,
}

/// Daily forecast derived from the 3-hourly series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub city: String,
    pub days: Vec<ForecastEntry>,
}

/// Reduce a 3-hourly forecast series to one entry per day: the first 12:00
/// sample of each calendar day, capped at [`FORECAST_DAYS`] days.
pub fn daily_at_noon(entries: Vec<ForecastEntry>) -> Vec<ForecastEntry> {
    let mut seen: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut days = Vec::new();
    for entry in entries {
        if days.len() == FORECAST_DAYS {
            break;
        }
        if entry.timestamp.hour() == 12 && seen.insert(entry.timestamp.date_naive()) {
            days.push(entry);
        }
    }
    days
}
