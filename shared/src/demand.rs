//! Demand estimation heuristics.
//!
//! Scores come from a catalog of base demand levels and per-season factors,
//! adjusted by weather impact per category plus a small jitter seeded from
//! the inputs. The same (product, season, weather) triple always yields the
//! same score. Estimation sits behind the [`DemandEstimator`] trait so a
//! real model can be substituted without touching the inventory core.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::models::{
    DemandPrediction, Priority, ProductCategory, Season, StockAction, WeatherCondition,
};

/// Estimates demand for a product under given conditions.
/// Returns `None` for products outside the known catalog.
pub trait DemandEstimator {
    fn estimate(
        &self,
        product: &str,
        season: Season,
        weather: WeatherCondition,
    ) -> Option<DemandPrediction>;
}

/// One catalog entry: base demand and per-season factors
/// (indexed by [`Season::index`]).
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: ProductCategory,
    pub base_demand: f64,
    pub seasonal: [f64; 5],
}

const fn fertilizer(name: &'static str, base_demand: f64, seasonal: [f64; 5]) -> CatalogEntry {
    CatalogEntry {
        name,
        category: ProductCategory::Fertilizers,
        base_demand,
        seasonal,
    }
}

const fn seed(name: &'static str, base_demand: f64, seasonal: [f64; 5]) -> CatalogEntry {
    CatalogEntry {
        name,
        category: ProductCategory::Seeds,
        base_demand,
        seasonal,
    }
}

const fn pesticide(name: &'static str, base_demand: f64, seasonal: [f64; 5]) -> CatalogEntry {
    CatalogEntry {
        name,
        category: ProductCategory::Pesticides,
        base_demand,
        seasonal,
    }
}

/// The known product catalog. Seasonal factors are ordered
/// Summer, Monsoon, Winter, Spring, Autumn.
pub const CATALOG: [CatalogEntry; 30] = [
    fertilizer("Urea", 85.0, [1.2, 1.5, 0.9, 1.3, 1.1]),
    fertilizer("DAP", 80.0, [1.1, 1.6, 0.8, 1.4, 1.0]),
    fertilizer("NPK", 75.0, [1.3, 1.4, 0.9, 1.5, 1.2]),
    fertilizer("Potash", 70.0, [1.0, 1.3, 0.8, 1.2, 1.0]),
    fertilizer("Organic Compost", 90.0, [1.1, 1.2, 1.0, 1.4, 1.3]),
    fertilizer("Vermicompost", 85.0, [1.2, 1.3, 1.0, 1.5, 1.2]),
    fertilizer("Phosphate", 72.0, [1.1, 1.4, 0.9, 1.3, 1.0]),
    fertilizer("Zinc Sulphate", 65.0, [1.0, 1.2, 0.8, 1.1, 0.9]),
    fertilizer("Boron", 60.0, [0.9, 1.1, 0.8, 1.2, 1.0]),
    fertilizer("Calcium Nitrate", 68.0, [1.0, 1.3, 0.9, 1.2, 1.0]),
    seed("Rice Seeds", 95.0, [1.5, 1.6, 0.7, 1.3, 1.0]),
    seed("Wheat Seeds", 90.0, [0.8, 0.7, 1.6, 1.2, 1.4]),
    seed("Cotton Seeds", 88.0, [1.4, 1.2, 0.8, 1.5, 1.0]),
    seed("Soybean Seeds", 82.0, [1.3, 1.5, 0.9, 1.2, 1.1]),
    seed("Corn Seeds", 85.0, [1.4, 1.3, 0.8, 1.5, 1.0]),
    seed("Sunflower Seeds", 75.0, [1.5, 1.0, 0.9, 1.4, 1.2]),
    seed("Chickpea Seeds", 78.0, [0.9, 0.8, 1.5, 1.3, 1.4]),
    seed("Mustard Seeds", 70.0, [0.8, 0.9, 1.6, 1.2, 1.5]),
    seed("Tomato Seeds", 80.0, [1.2, 1.1, 1.4, 1.3, 1.2]),
    seed("Onion Seeds", 77.0, [1.1, 1.2, 1.3, 1.4, 1.3]),
    pesticide("Insecticide", 92.0, [1.5, 1.6, 0.8, 1.4, 1.2]),
    pesticide("Fungicide", 88.0, [1.2, 1.7, 0.9, 1.3, 1.1]),
    pesticide("Herbicide", 85.0, [1.3, 1.4, 0.9, 1.5, 1.2]),
    pesticide("Nematicide", 70.0, [1.1, 1.3, 0.8, 1.2, 1.0]),
    pesticide("Rodenticide", 65.0, [1.0, 1.2, 1.1, 1.1, 1.2]),
    pesticide("Bactericide", 72.0, [1.2, 1.5, 0.9, 1.3, 1.1]),
    pesticide("Bio-Pesticide", 78.0, [1.3, 1.4, 1.0, 1.5, 1.3]),
    pesticide("Growth Regulator", 68.0, [1.2, 1.3, 0.9, 1.4, 1.1]),
    pesticide("Plant Tonic", 75.0, [1.1, 1.2, 1.0, 1.3, 1.2]),
    pesticide("Weedicide", 82.0, [1.4, 1.5, 0.9, 1.6, 1.3]),
];

/// Look up a catalog entry by exact product name.
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Weather impact factor for a product category.
pub fn weather_factor(category: ProductCategory, weather: WeatherCondition) -> f64 {
    // [fertilizer, seed, pesticide] per condition
    let factors = match weather {
        WeatherCondition::Hot => [1.15, 1.10, 1.20],
        WeatherCondition::Rainy => [1.30, 1.25, 1.40],
        WeatherCondition::Cold => [0.85, 0.80, 0.90],
        WeatherCondition::Normal => [1.00, 1.00, 1.00],
        WeatherCondition::Humid => [1.10, 1.05, 1.35],
        WeatherCondition::Dry => [0.90, 0.85, 0.95],
    };
    match category {
        ProductCategory::Fertilizers => factors[0],
        ProductCategory::Seeds => factors[1],
        ProductCategory::Pesticides => factors[2],
    }
}

/// Round a floating-point score to 2 decimal places.
pub fn round2f(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Recommendation derived from a demand score.
#[derive(Debug, Clone)]
pub struct Recommendation {
    pub action: StockAction,
    pub priority: Priority,
    pub recommended_stock: i64,
    pub message: &'static str,
}

/// Map a demand score onto stocking recommendation bands.
pub fn recommend(score: f64) -> Recommendation {
    if score > 120.0 {
        Recommendation {
            action: StockAction::IncreaseStock,
            priority: Priority::High,
            recommended_stock: (score * 1.5).round() as i64,
            message: "High demand expected - Stock up significantly",
        }
    } else if score > 100.0 {
        Recommendation {
            action: StockAction::MaintainStock,
            priority: Priority::Medium,
            recommended_stock: (score * 1.2).round() as i64,
            message: "Stable demand - Continue normal operations",
        }
    } else if score > 80.0 {
        Recommendation {
            action: StockAction::MaintainStock,
            priority: Priority::Medium,
            recommended_stock: score.round() as i64,
            message: "Normal demand levels",
        }
    } else if score > 60.0 {
        Recommendation {
            action: StockAction::SlightReduction,
            priority: Priority::Low,
            recommended_stock: (score * 0.9).round() as i64,
            message: "Lower demand - Consider minor stock reduction",
        }
    } else {
        Recommendation {
            action: StockAction::ReduceStock,
            priority: Priority::Low,
            recommended_stock: (score * 0.7).round() as i64,
            message: "Low demand - Reduce inventory significantly",
        }
    }
}

/// Build the full prediction for a catalog entry with a given final score.
/// Used by the heuristic path and by callers substituting a remote score.
pub fn prediction_with_score(
    entry: &CatalogEntry,
    season: Season,
    weather: WeatherCondition,
    score: f64,
) -> DemandPrediction {
    let recommendation = recommend(score);
    DemandPrediction {
        product: entry.name.to_string(),
        category: entry.category,
        season,
        weather,
        base_demand: entry.base_demand,
        seasonal_factor: entry.seasonal[season.index()],
        weather_factor: weather_factor(entry.category, weather),
        demand_score: score,
        recommended_stock: recommendation.recommended_stock,
        action: recommendation.action,
        priority: recommendation.priority,
        message: recommendation.message.to_string(),
    }
}

/// Catalog-driven estimator with deterministic jitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEstimator;

impl HeuristicEstimator {
    fn jitter(product: &str, season: Season, weather: WeatherCondition) -> f64 {
        let mut hasher = DefaultHasher::new();
        product.hash(&mut hasher);
        season.as_str().hash(&mut hasher);
        weather.as_str().hash(&mut hasher);
        let mut rng = StdRng::seed_from_u64(hasher.finish());
        rng.gen_range(0.95..=1.05)
    }
}

impl DemandEstimator for HeuristicEstimator {
    fn estimate(
        &self,
        product: &str,
        season: Season,
        weather: WeatherCondition,
    ) -> Option<DemandPrediction> {
        let entry = lookup(product)?;
        let raw = entry.base_demand
            * entry.seasonal[season.index()]
            * weather_factor(entry.category, weather)
            * Self::jitter(product, season, weather);
        Some(prediction_with_score(entry, season, weather, round2f(raw)))
    }
}
