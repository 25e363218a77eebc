//! Inventory analyzer: the single source of truth for stock classification,
//! aggregate statistics, and monthly trend buckets.
//!
//! All functions here are pure and synchronous. Wall-clock time is threaded
//! in as an explicit `now` so results are deterministic and testable. The
//! statistics recompute per-kind counts through the same [`stock_level`]
//! function the itemized alerts use, so the two views cannot drift.

use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use crate::models::{AlertKind, InventoryStats, Product, StockAlert, StockLevel, TrendPoint};

/// Products expiring within this many days raise an expiring-soon alert
pub const EXPIRY_WINDOW_DAYS: i64 = 5;

/// Trend output is capped to the most recent buckets
pub const TREND_MONTHS: usize = 6;

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Round money values to 2 decimal places, half away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Classify a product's stock level. The chain is order-sensitive: a product
/// with `min_stock_level >= max_stock_level` resolves to `Low` on a tie
/// because the low-stock branch is checked first.
pub fn stock_level(product: &Product) -> StockLevel {
    if product.quantity == 0 {
        StockLevel::OutOfStock
    } else if product.quantity <= product.min_stock_level {
        StockLevel::Low
    } else if product.quantity >= product.max_stock_level {
        StockLevel::Over
    } else {
        StockLevel::Optimal
    }
}

/// Suggested reorder quantity for a low-stock product:
/// `max(min * 2 - quantity, min)`.
pub fn reorder_quantity(product: &Product) -> i32 {
    (product.min_stock_level * 2 - product.quantity).max(product.min_stock_level)
}

fn expires_within_window(product: &Product, now: DateTime<Utc>) -> bool {
    match product.expiry_date {
        Some(expiry) => {
            let today = now.date_naive();
            expiry >= today && expiry <= today + Duration::days(EXPIRY_WINDOW_DAYS)
        }
        None => false,
    }
}

/// Produce the ordered alert list for a product snapshot.
///
/// Each product yields exactly one stock-level alert, plus an expiring-soon
/// alert when its expiry date falls inside the 5-day window. An out-of-stock
/// product yields only the out-of-stock alert: reordering supersedes any
/// expiry concern for stock that is already gone. Alerts appear in input
/// order, expiry before stock level within a product.
pub fn classify(products: &[Product], now: DateTime<Utc>) -> Vec<StockAlert> {
    let mut alerts = Vec::with_capacity(products.len());
    for product in products {
        let level = stock_level(product);
        if level == StockLevel::OutOfStock {
            alerts.push(StockAlert {
                kind: level.alert_kind(),
                product_name: product.name.clone(),
                current_stock: product.quantity,
                message: "Product is out of stock! Immediate reorder required.".to_string(),
                min_stock_level: Some(product.min_stock_level),
                max_stock_level: None,
                expiry_date: None,
                reorder_quantity: None,
            });
            continue;
        }

        if expires_within_window(product, now) {
            alerts.push(StockAlert {
                kind: AlertKind::ExpiringSoon,
                product_name: product.name.clone(),
                current_stock: product.quantity,
                message: format!(
                    "Product expiring within {} days! Use or sell quickly.",
                    EXPIRY_WINDOW_DAYS
                ),
                min_stock_level: None,
                max_stock_level: None,
                expiry_date: product.expiry_date,
                reorder_quantity: None,
            });
        }

        alerts.push(match level {
            StockLevel::Low => {
                let reorder = reorder_quantity(product);
                StockAlert {
                    kind: level.alert_kind(),
                    product_name: product.name.clone(),
                    current_stock: product.quantity,
                    message: format!(
                        "Stock level critically low. Reorder {}+ units immediately.",
                        reorder
                    ),
                    min_stock_level: Some(product.min_stock_level),
                    max_stock_level: None,
                    expiry_date: None,
                    reorder_quantity: Some(reorder),
                }
            }
            StockLevel::Over => StockAlert {
                kind: level.alert_kind(),
                product_name: product.name.clone(),
                current_stock: product.quantity,
                message: "Excess inventory detected. Consider reducing next order.".to_string(),
                min_stock_level: None,
                max_stock_level: Some(product.max_stock_level),
                expiry_date: None,
                reorder_quantity: None,
            },
            _ => StockAlert {
                kind: level.alert_kind(),
                product_name: product.name.clone(),
                current_stock: product.quantity,
                message: "Stock level is optimal.".to_string(),
                min_stock_level: Some(product.min_stock_level),
                max_stock_level: Some(product.max_stock_level),
                expiry_date: None,
                reorder_quantity: None,
            },
        });
    }
    alerts
}

/// Single-pass aggregate statistics over a product snapshot.
pub fn summarize(products: &[Product], now: DateTime<Utc>) -> InventoryStats {
    let mut stats = InventoryStats {
        total_products: products.len(),
        ..Default::default()
    };
    let mut total_cost = Decimal::ZERO;
    let mut total_value = Decimal::ZERO;

    for product in products {
        match stock_level(product) {
            StockLevel::OutOfStock => stats.out_of_stock += 1,
            StockLevel::Low => stats.low_stock += 1,
            StockLevel::Over => stats.over_stock += 1,
            StockLevel::Optimal => stats.optimal += 1,
        }
        stats.total_quantity += i64::from(product.quantity);
        total_value += Decimal::from(product.quantity) * product.cost_per_unit;
        total_cost += product.cost_per_unit;
        // Counted regardless of stock level, unlike the alert list
        if expires_within_window(product, now) {
            stats.expiring_soon += 1;
        }
    }

    stats.total_stock_value = round2(total_value);
    stats.average_cost_per_unit = if products.is_empty() {
        Decimal::ZERO
    } else {
        round2(total_cost / Decimal::from(products.len() as u64))
    };
    stats
}

/// Month-bucketed trend series: per creation month, the product count,
/// quantity sum and value sum. Chronological, most recent 6 buckets.
pub fn trend(products: &[Product]) -> Vec<TrendPoint> {
    let mut buckets: BTreeMap<(i32, u32), (usize, i64, Decimal)> = BTreeMap::new();
    for product in products {
        let created = product.created_at;
        let entry = buckets.entry((created.year(), created.month())).or_default();
        entry.0 += 1;
        entry.1 += i64::from(product.quantity);
        entry.2 += Decimal::from(product.quantity) * product.cost_per_unit;
    }

    let points: Vec<TrendPoint> = buckets
        .into_iter()
        .map(|((_, month), (count, quantity, value))| TrendPoint {
            month: MONTH_LABELS[(month - 1) as usize].to_string(),
            products: count,
            quantity,
            value: round2(value),
        })
        .collect();

    let skip = points.len().saturating_sub(TREND_MONTHS);
    points.into_iter().skip(skip).collect()
}
