//! Product inventory service: owner-scoped CRUD plus derived views.
//!
//! Alerts, statistics and trends are computed by the shared analyzer over a
//! snapshot fetched here, so every consumer sees the same classification.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use shared::analyzer;
use shared::models::{InventoryStats, NewProduct, Product, StockAlert, TrendPoint, UpdateProduct};
use shared::models::{
    DEFAULT_CATEGORY, DEFAULT_MAX_STOCK_LEVEL, DEFAULT_MIN_STOCK_LEVEL, DEFAULT_UNIT,
};
use shared::validation::{validate_cost, validate_product_name, validate_quantity};

use crate::error::{AppError, AppResult};

/// Product service for managing one owner's inventory records
#[derive(Clone)]
pub struct ProductService {
    db: PgPool,
}

/// Database row for a product
#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    owner_id: String,
    name: String,
    quantity: i32,
    category: String,
    unit: String,
    cost_per_unit: Decimal,
    expiry_date: Option<NaiveDate>,
    min_stock_level: i32,
    max_stock_level: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            quantity: row.quantity,
            category: row.category,
            unit: row.unit,
            cost_per_unit: row.cost_per_unit,
            expiry_date: row.expiry_date,
            min_stock_level: row.min_stock_level,
            max_stock_level: row.max_stock_level,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_COLUMNS: &str = "id, owner_id, name, quantity, category, unit, cost_per_unit, \
                              expiry_date, min_stock_level, max_stock_level, created_at, updated_at";

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all products for an owner, newest first
    pub async fn list(&self, owner_id: &str) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Add a new product with defaulted optional fields
    pub async fn add(&self, input: NewProduct) -> AppResult<Product> {
        validate_product_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validate_quantity(input.quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;
        let cost_per_unit = input.cost_per_unit.unwrap_or(Decimal::ZERO);
        validate_cost(cost_per_unit).map_err(|msg| AppError::Validation {
            field: "cost_per_unit".to_string(),
            message: msg.to_string(),
        })?;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            INSERT INTO products (
                owner_id, name, quantity, category, unit, cost_per_unit,
                expiry_date, min_stock_level, max_stock_level
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(&input.owner_id)
        .bind(input.name.trim())
        .bind(input.quantity)
        .bind(input.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
        .bind(input.unit.as_deref().unwrap_or(DEFAULT_UNIT))
        .bind(cost_per_unit)
        .bind(input.expiry_date)
        .bind(input.min_stock_level.unwrap_or(DEFAULT_MIN_STOCK_LEVEL))
        .bind(input.max_stock_level.unwrap_or(DEFAULT_MAX_STOCK_LEVEL))
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Apply a partial update to a product
    pub async fn update(&self, id: Uuid, input: UpdateProduct) -> AppResult<Product> {
        let existing = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let name = input.name.unwrap_or(existing.name);
        let quantity = input.quantity.unwrap_or(existing.quantity);
        let cost_per_unit = input.cost_per_unit.unwrap_or(existing.cost_per_unit);
        let expiry_date = input.expiry_date.or(existing.expiry_date);

        validate_product_name(&name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;
        validate_quantity(quantity).map_err(|msg| AppError::Validation {
            field: "quantity".to_string(),
            message: msg.to_string(),
        })?;
        validate_cost(cost_per_unit).map_err(|msg| AppError::Validation {
            field: "cost_per_unit".to_string(),
            message: msg.to_string(),
        })?;

        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE products
            SET name = $1, quantity = $2, category = $3, unit = $4, cost_per_unit = $5,
                expiry_date = $6, min_stock_level = $7, max_stock_level = $8, updated_at = now()
            WHERE id = $9
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(name.trim())
        .bind(quantity)
        .bind(input.category.unwrap_or(existing.category))
        .bind(input.unit.unwrap_or(existing.unit))
        .bind(cost_per_unit)
        .bind(expiry_date)
        .bind(input.min_stock_level.unwrap_or(existing.min_stock_level))
        .bind(input.max_stock_level.unwrap_or(existing.max_stock_level))
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    /// Delete a product by id
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        Ok(())
    }

    /// Aggregate statistics over the owner's current snapshot
    pub async fn stats(&self, owner_id: &str, now: DateTime<Utc>) -> AppResult<InventoryStats> {
        let products = self.list(owner_id).await?;
        Ok(analyzer::summarize(&products, now))
    }

    /// Monthly trend over the owner's snapshot, oldest bucket first
    pub async fn trend(&self, owner_id: &str) -> AppResult<Vec<TrendPoint>> {
        let products = self.list(owner_id).await?;
        Ok(analyzer::trend(&products))
    }

    /// Classified alerts over the owner's current snapshot
    pub async fn alerts(&self, owner_id: &str, now: DateTime<Utc>) -> AppResult<Vec<StockAlert>> {
        let products = self.list(owner_id).await?;
        Ok(analyzer::classify(&products, now))
    }
}
