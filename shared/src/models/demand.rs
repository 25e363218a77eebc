//! Demand prediction models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Growing seasons recognized by the demand model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Monsoon,
    Winter,
    Spring,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Summer,
        Season::Monsoon,
        Season::Winter,
        Season::Spring,
        Season::Autumn,
    ];

    /// Index into per-season factor tables
    pub fn index(self) -> usize {
        match self {
            Season::Summer => 0,
            Season::Monsoon => 1,
            Season::Winter => 2,
            Season::Spring => 3,
            Season::Autumn => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Autumn => "Autumn",
        }
    }
}

/// Weather conditions affecting demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Hot,
    Rainy,
    Cold,
    Normal,
    Humid,
    Dry,
}

impl WeatherCondition {
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherCondition::Hot => "Hot",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Cold => "Cold",
            WeatherCondition::Normal => "Normal",
            WeatherCondition::Humid => "Humid",
            WeatherCondition::Dry => "Dry",
        }
    }
}

/// Product categories in the demand catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    Fertilizers,
    Seeds,
    Pesticides,
}

/// Recommended inventory action derived from a demand score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockAction {
    IncreaseStock,
    MaintainStock,
    SlightReduction,
    ReduceStock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Demand prediction for one product under a season/weather combination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandPrediction {
    pub product: String,
    pub category: ProductCategory,
    pub season: Season,
    pub weather: WeatherCondition,
    pub base_demand: f64,
    pub seasonal_factor: f64,
    pub weather_factor: f64,
    /// Final score, rounded to 2 decimal places
    pub demand_score: f64,
    pub recommended_stock: i64,
    pub action: StockAction,
    pub priority: Priority,
    pub message: String,
}

/// One row of a batch prediction, enriched with cost data from the upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPredictionItem {
    #[serde(flatten)]
    pub prediction: DemandPrediction,
    pub cost_per_unit: Decimal,
    pub estimated_cost: Decimal,
}

/// Summary statistics over a batch prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_products: usize,
    /// Predictions with score above 120
    pub high_demand_count: usize,
    /// Predictions with score below 60
    pub low_demand_count: usize,
    pub total_estimated_cost: Decimal,
    pub average_demand_score: f64,
}

/// Batch prediction result, sorted by demand score descending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPrediction {
    pub predictions: Vec<BatchPredictionItem>,
    pub summary: BatchSummary,
}
