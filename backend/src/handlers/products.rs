//! HTTP handlers for product inventory endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use shared::models::{InventoryStats, NewProduct, Product, StockAlert, TrendPoint, UpdateProduct};

use crate::error::AppResult;
use crate::services::product::ProductService;
use crate::AppState;

/// List all products for an owner
pub async fn list_products(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.db);
    let products = service.list(&owner_id).await?;
    Ok(Json(products))
}

/// Add a new product
pub async fn add_product(
    State(state): State<AppState>,
    Json(input): Json<NewProduct>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.db);
    let product = service.add(input).await?;
    Ok(Json(product))
}

/// Update a product
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.db);
    let product = service.update(id, input).await?;
    Ok(Json(product))
}

/// Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<()>> {
    let service = ProductService::new(state.db);
    service.delete(id).await?;
    Ok(Json(()))
}

/// Get aggregate statistics for an owner's inventory
pub async fn get_product_stats(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> AppResult<Json<InventoryStats>> {
    let service = ProductService::new(state.db);
    let stats = service.stats(&owner_id, Utc::now()).await?;
    Ok(Json(stats))
}

/// Get the monthly trend series for an owner's inventory
pub async fn get_monthly_trend(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> AppResult<Json<Vec<TrendPoint>>> {
    let service = ProductService::new(state.db);
    let trend = service.trend(&owner_id).await?;
    Ok(Json(trend))
}

/// Get classified stock alerts for an owner's inventory
pub async fn get_stock_alerts(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> AppResult<Json<Vec<StockAlert>>> {
    let service = ProductService::new(state.db);
    let alerts = service.alerts(&owner_id, Utc::now()).await?;
    Ok(Json(alerts))
}
