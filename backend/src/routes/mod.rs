//! Route definitions for the Agri Insights Hub

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Product inventory
        .nest("/products", product_routes())
        // Weather insights
        .nest("/weather", weather_routes())
        // Demand prediction
        .nest("/demand", demand_routes())
}

/// Product inventory routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::add_product))
        // For GET, :id is the inventory owner; for PUT/DELETE it is a product id
        .route(
            "/:id",
            get(handlers::list_products)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/:id/stats", get(handlers::get_product_stats))
        .route("/:id/trend", get(handlers::get_monthly_trend))
        .route("/:id/alerts", get(handlers::get_stock_alerts))
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::fetch_current_weather))
        .route("/forecast", get(handlers::get_weather_forecast))
}

/// Demand prediction routes
fn demand_routes() -> Router<AppState> {
    Router::new()
        .route("/predict", post(handlers::predict_demand))
        .route("/batch", post(handlers::predict_batch))
        .route("/import", post(handlers::import_products))
}
