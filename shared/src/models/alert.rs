//! Derived stock and expiry alerts. Alerts are ephemeral: computed from a
//! snapshot of products, never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Classification of a single alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    OutOfStock,
    LowStock,
    Overstock,
    Optimal,
    ExpiringSoon,
}

/// Mutually exclusive stock-level classification for one product.
/// Expiry is tracked separately since it can coexist with a stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    OutOfStock,
    Low,
    Over,
    Optimal,
}

impl StockLevel {
    /// The alert kind reported for this stock level
    pub fn alert_kind(self) -> AlertKind {
        match self {
            StockLevel::OutOfStock => AlertKind::OutOfStock,
            StockLevel::Low => AlertKind::LowStock,
            StockLevel::Over => AlertKind::Overstock,
            StockLevel::Optimal => AlertKind::Optimal,
        }
    }
}

/// One derived alert for a product, with the threshold(s) that triggered it
/// carried along for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAlert {
    pub kind: AlertKind,
    pub product_name: String,
    pub current_stock: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_stock_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stock_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    /// Suggested reorder quantity, set on low-stock alerts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_quantity: Option<i32>,
}
