//! Forecast reduction tests
//!
//! The upstream forecast API emits samples every three hours; the reduction
//! keeps each day's noon sample, capped at seven days.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use shared::models::weather::{daily_at_noon, ForecastEntry, FORECAST_DAYS};

fn entry(timestamp: DateTime<Utc>) -> ForecastEntry {
    ForecastEntry {
        timestamp,
        temperature_celsius: Decimal::from(25),
        temp_min_celsius: Decimal::from(20),
        temp_max_celsius: Decimal::from(30),
        humidity_percent: 60,
        condition: "Clear".to_string(),
        description: "clear sky".to_string(),
        icon: "01d".to_string(),
        pop: Decimal::ZERO,
    }
}

/// Five days of 3-hourly samples starting at the given instant
fn three_hourly(start: DateTime<Utc>, days: i64) -> Vec<ForecastEntry> {
    (0..days * 8)
        .map(|i| entry(start + Duration::hours(3 * i)))
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_picks_one_noon_sample_per_day() {
        let start = Utc.with_ymd_and_hms(2025, 6, 10, 0, 0, 0).unwrap();
        let days = daily_at_noon(three_hourly(start, 5));
        assert_eq!(days.len(), 5);
        for day in &days {
            assert_eq!(day.timestamp.time().to_string(), "12:00:00");
        }
    }

    #[test]
    fn test_caps_at_seven_days() {
        let start = Utc.with_ymd_and_hms(2025, 6, 10, 0, 0, 0).unwrap();
        let days = daily_at_noon(three_hourly(start, 10));
        assert_eq!(days.len(), FORECAST_DAYS);
    }

    /// A series starting mid-afternoon has no noon sample for its first day
    #[test]
    fn test_day_without_noon_sample_is_dropped() {
        let start = Utc.with_ymd_and_hms(2025, 6, 10, 15, 0, 0).unwrap();
        let days = daily_at_noon(three_hourly(start, 3));
        assert!(days
            .iter()
            .all(|d| d.timestamp.date_naive() != start.date_naive()));
    }

    #[test]
    fn test_empty_series() {
        assert!(daily_at_noon(Vec::new()).is_empty());
    }

    /// Duplicate noon samples for one day keep only the first
    #[test]
    fn test_first_noon_sample_wins() {
        let noon = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        let mut first = entry(noon);
        first.condition = "Rain".to_string();
        let second = entry(noon);

        let days = daily_at_noon(vec![first, second]);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].condition, "Rain");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use chrono::Timelike;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The reduction never exceeds the cap and never repeats a date
        #[test]
        fn prop_bounded_and_distinct(offsets in prop::collection::vec(0..2400i64, 0..120)) {
            let base = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
            let entries: Vec<ForecastEntry> = offsets
                .iter()
                .map(|&h| entry(base + Duration::hours(h)))
                .collect();

            let days = daily_at_noon(entries);
            prop_assert!(days.len() <= FORECAST_DAYS);

            let mut dates: Vec<_> = days.iter().map(|d| d.timestamp.date_naive()).collect();
            dates.sort();
            dates.dedup();
            prop_assert_eq!(dates.len(), days.len());

            for day in &days {
                prop_assert_eq!(day.timestamp.hour(), 12);
            }
        }
    }
}
