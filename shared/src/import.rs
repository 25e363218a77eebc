//! Best-effort column mapping for uploaded spreadsheets.
//!
//! External files name their columns freely ("Product Name", "Rate", "Qty").
//! Each logical field has an explicit ordered alias list, resolved once
//! against the header row; earlier aliases win when several headers match.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted header aliases for the product name column, in priority order
pub const NAME_ALIASES: [&str; 4] = ["product_name", "product", "name", "item"];

/// Accepted header aliases for the unit cost column
pub const COST_ALIASES: [&str; 4] = ["cost_per_unit", "cost", "price", "rate"];

/// Accepted header aliases for the stock quantity column
pub const QUANTITY_ALIASES: [&str; 4] = ["quantity", "stock", "qty", "current_stock"];

/// A product row parsed from an uploaded file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedProduct {
    pub name: String,
    pub cost_per_unit: Decimal,
    pub current_stock: i64,
}

/// Resolved column indices for the logical fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub cost: Option<usize>,
    pub quantity: Option<usize>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    #[error("no product name column found in header row")]
    MissingNameColumn,
    #[error("no product data rows found")]
    Empty,
}

/// Normalize a header for alias comparison: lowercased, trimmed,
/// inner whitespace collapsed to underscores.
fn normalize(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize(h)).collect();
    for alias in aliases {
        if let Some(index) = normalized.iter().position(|h| h == alias) {
            return Some(index);
        }
    }
    None
}

/// Resolve the header row into a [`ColumnMap`]. A name column is required;
/// cost and quantity are optional and default to zero when absent.
pub fn resolve_columns(headers: &[String]) -> Result<ColumnMap, ImportError> {
    let name = find_column(headers, &NAME_ALIASES).ok_or(ImportError::MissingNameColumn)?;
    Ok(ColumnMap {
        name,
        cost: find_column(headers, &COST_ALIASES),
        quantity: find_column(headers, &QUANTITY_ALIASES),
    })
}

/// Map one record through the resolved columns. Returns `None` when the name
/// cell is empty; malformed numeric cells fall back to zero.
pub fn map_record(map: &ColumnMap, record: &[String]) -> Option<ImportedProduct> {
    let name = record.get(map.name)?.trim();
    if name.is_empty() {
        return None;
    }
    let cost_per_unit = map
        .cost
        .and_then(|i| record.get(i))
        .and_then(|cell| cell.trim().parse::<Decimal>().ok())
        .unwrap_or_default();
    let current_stock = map
        .quantity
        .and_then(|i| record.get(i))
        .and_then(|cell| cell.trim().parse::<i64>().ok())
        .unwrap_or_default();
    Some(ImportedProduct {
        name: name.to_string(),
        cost_per_unit,
        current_stock,
    })
}
