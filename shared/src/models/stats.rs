//! Derived inventory statistics and monthly trend series

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over one owner's product snapshot.
///
/// Per-kind counts are produced by the same classification rule as the
/// itemized alerts, so the two views never drift apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryStats {
    pub total_products: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub over_stock: usize,
    pub optimal: usize,
    pub total_quantity: i64,
    pub total_stock_value: Decimal,
    pub average_cost_per_unit: Decimal,
    /// Products expiring within the 5-day window, independent of stock level
    pub expiring_soon: usize,
}

/// One calendar month's aggregated totals, keyed by product creation month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Short month label ("Jan".."Dec")
    pub month: String,
    pub products: usize,
    pub quantity: i64,
    pub value: Decimal,
}
