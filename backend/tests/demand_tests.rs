//! Demand estimation tests
//!
//! Covers the product catalog, seasonal/weather factors, the recommendation
//! bands and the deterministic heuristic estimator.

use proptest::prelude::*;

use shared::demand::{
    lookup, prediction_with_score, recommend, weather_factor, DemandEstimator, HeuristicEstimator,
    CATALOG,
};
use shared::models::{Priority, ProductCategory, Season, StockAction, WeatherCondition};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_catalog_has_thirty_products() {
        assert_eq!(CATALOG.len(), 30);
    }

    /// Lookup matches catalog names exactly; casing variants are unknown
    #[test]
    fn test_lookup_is_exact_match() {
        assert!(lookup("Urea").is_some());
        assert!(lookup("urea").is_none());
        assert!(lookup("UREA").is_none());
        assert!(lookup("unobtainium").is_none());
    }

    #[test]
    fn test_weather_factor_rainy_boosts_pesticides_most() {
        let fert = weather_factor(ProductCategory::Fertilizers, WeatherCondition::Rainy);
        let seed = weather_factor(ProductCategory::Seeds, WeatherCondition::Rainy);
        let pest = weather_factor(ProductCategory::Pesticides, WeatherCondition::Rainy);
        assert_eq!(fert, 1.30);
        assert_eq!(seed, 1.25);
        assert_eq!(pest, 1.40);
    }

    #[test]
    fn test_weather_factor_normal_is_neutral() {
        for category in [
            ProductCategory::Fertilizers,
            ProductCategory::Seeds,
            ProductCategory::Pesticides,
        ] {
            assert_eq!(weather_factor(category, WeatherCondition::Normal), 1.0);
        }
    }

    /// Recommendation bands with their stock multipliers
    #[test]
    fn test_recommendation_bands() {
        let high = recommend(130.0);
        assert_eq!(high.action, StockAction::IncreaseStock);
        assert_eq!(high.priority, Priority::High);
        assert_eq!(high.recommended_stock, 195);

        let steady = recommend(110.0);
        assert_eq!(steady.action, StockAction::MaintainStock);
        assert_eq!(steady.recommended_stock, 132);

        let normal = recommend(90.0);
        assert_eq!(normal.action, StockAction::MaintainStock);
        assert_eq!(normal.recommended_stock, 90);

        let slow = recommend(70.0);
        assert_eq!(slow.action, StockAction::SlightReduction);
        assert_eq!(slow.recommended_stock, 63);

        let low = recommend(40.0);
        assert_eq!(low.action, StockAction::ReduceStock);
        assert_eq!(low.priority, Priority::Low);
        assert_eq!(low.recommended_stock, 28);
    }

    /// Recommended stock is the score times the band multiplier, rounded
    #[test]
    fn test_recommended_stock_from_score() {
        let entry = lookup("Urea").unwrap();
        let p = prediction_with_score(entry, Season::Summer, WeatherCondition::Normal, 130.0);
        assert_eq!(p.recommended_stock, 195);
        assert_eq!(p.demand_score, 130.0);

        let q = prediction_with_score(entry, Season::Summer, WeatherCondition::Normal, 50.0);
        assert_eq!(q.recommended_stock, 35);
    }

    /// Same inputs always produce the same prediction
    #[test]
    fn test_heuristic_is_deterministic() {
        let estimator = HeuristicEstimator;
        let a = estimator
            .estimate("Urea", Season::Monsoon, WeatherCondition::Rainy)
            .unwrap();
        let b = estimator
            .estimate("Urea", Season::Monsoon, WeatherCondition::Rainy)
            .unwrap();
        assert_eq!(a.demand_score, b.demand_score);
        assert_eq!(a.recommended_stock, b.recommended_stock);
        assert_eq!(a.action, b.action);
    }

    #[test]
    fn test_heuristic_unknown_product() {
        let estimator = HeuristicEstimator;
        assert!(estimator
            .estimate("Unknown Item", Season::Summer, WeatherCondition::Normal)
            .is_none());
    }

    /// The prediction echoes its inputs for display
    #[test]
    fn test_prediction_carries_inputs() {
        let estimator = HeuristicEstimator;
        let p = estimator
            .estimate("Wheat Seeds", Season::Winter, WeatherCondition::Cold)
            .unwrap();
        assert_eq!(p.product, "Wheat Seeds");
        assert_eq!(p.category, ProductCategory::Seeds);
        assert_eq!(p.season, Season::Winter);
        assert_eq!(p.weather, WeatherCondition::Cold);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn season_strategy() -> impl Strategy<Value = Season> {
        prop::sample::select(Season::ALL.to_vec())
    }

    fn weather_strategy() -> impl Strategy<Value = WeatherCondition> {
        prop::sample::select(vec![
            WeatherCondition::Hot,
            WeatherCondition::Rainy,
            WeatherCondition::Cold,
            WeatherCondition::Normal,
            WeatherCondition::Humid,
            WeatherCondition::Dry,
        ])
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// The heuristic score stays within the jittered factor envelope for
        /// every catalog product under every season/weather combination
        #[test]
        fn prop_score_within_factor_envelope(
            index in 0..30usize,
            season in season_strategy(),
            weather in weather_strategy(),
        ) {
            let entry = &CATALOG[index];
            let estimator = HeuristicEstimator;
            let p = estimator.estimate(entry.name, season, weather).unwrap();

            let seasonal = entry.seasonal[season.index()];
            let base = entry.base_demand * seasonal * weather_factor(entry.category, weather);
            prop_assert!(p.demand_score >= base * 0.95 - 0.01);
            prop_assert!(p.demand_score <= base * 1.05 + 0.01);
            prop_assert_eq!(p.seasonal_factor, seasonal);
        }

        /// Recommended stock is never negative and its message is non-empty
        #[test]
        fn prop_recommended_stock_non_negative(score in 0.0..500.0f64) {
            let rec = recommend(score);
            prop_assert!(rec.recommended_stock >= 0);
            prop_assert!(!rec.message.is_empty());
        }

        /// Each score maps to exactly one band multiplier
        #[test]
        fn prop_bands_partition_scores(score in 0.0..300.0f64) {
            let rec = recommend(score);
            let multiplier = if score > 120.0 {
                1.5
            } else if score > 100.0 {
                1.2
            } else if score > 80.0 {
                1.0
            } else if score > 60.0 {
                0.9
            } else {
                0.7
            };
            prop_assert_eq!(rec.recommended_stock, (score * multiplier).round() as i64);
        }
    }
}
