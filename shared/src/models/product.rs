//! Product inventory models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default category assigned when none is provided
pub const DEFAULT_CATEGORY: &str = "General";

/// Default unit of measure
pub const DEFAULT_UNIT: &str = "units";

/// Default minimum stock level (low-stock threshold)
pub const DEFAULT_MIN_STOCK_LEVEL: i32 = 10;

/// Default maximum stock level (overstock threshold)
pub const DEFAULT_MAX_STOCK_LEVEL: i32 = 1000;

/// A product record in one owner's inventory.
///
/// `min_stock_level < max_stock_level` is expected but not enforced; the
/// analyzer resolves ties in favour of low-stock (see `analyzer::stock_level`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub quantity: i32,
    pub category: String,
    pub unit: String,
    pub cost_per_unit: Decimal,
    pub expiry_date: Option<NaiveDate>,
    pub min_stock_level: i32,
    pub max_stock_level: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product. Owner, name and quantity are required;
/// everything else falls back to the defaults above.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub owner_id: String,
    pub name: String,
    pub quantity: i32,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub cost_per_unit: Option<Decimal>,
    pub expiry_date: Option<NaiveDate>,
    pub min_stock_level: Option<i32>,
    pub max_stock_level: Option<i32>,
}

/// Partial-field update for a product. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub cost_per_unit: Option<Decimal>,
    pub expiry_date: Option<NaiveDate>,
    pub min_stock_level: Option<i32>,
    pub max_stock_level: Option<i32>,
}
