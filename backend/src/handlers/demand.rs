//! HTTP handlers for demand prediction endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use shared::import::ImportedProduct;
use shared::models::{BatchPrediction, DemandPrediction, Season, WeatherCondition};

use crate::error::{AppError, AppResult};
use crate::services::demand::DemandService;
use crate::services::import;
use crate::AppState;

/// Input for a single-product demand prediction
#[derive(Debug, Deserialize)]
pub struct PredictDemandInput {
    pub product: String,
    pub season: Season,
    pub weather: WeatherCondition,
}

/// Input for a batch demand prediction
#[derive(Debug, Deserialize)]
pub struct BatchPredictInput {
    pub products: Vec<ImportedProduct>,
    pub season: Season,
    pub weather: WeatherCondition,
}

/// Response for an uploaded product file
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub filename: String,
    pub total_products: usize,
    pub products: Vec<ImportedProduct>,
}

/// Predict demand for a single product
pub async fn predict_demand(
    State(state): State<AppState>,
    Json(input): Json<PredictDemandInput>,
) -> AppResult<Json<DemandPrediction>> {
    let service = DemandService::new(&state.config.demand);
    let prediction = service
        .predict(&input.product, input.season, input.weather)
        .await?;
    Ok(Json(prediction))
}

/// Predict demand for a batch of products
pub async fn predict_batch(
    State(state): State<AppState>,
    Json(input): Json<BatchPredictInput>,
) -> AppResult<Json<BatchPrediction>> {
    let service = DemandService::new(&state.config.demand);
    let batch = service
        .predict_batch(input.products, input.season, input.weather)
        .await?;
    Ok(Json(batch))
}

/// Upload a product spreadsheet (CSV) and return the parsed rows
pub async fn import_products(mut multipart: Multipart) -> AppResult<Json<ImportResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload.csv").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::ValidationError(format!("Failed to read upload: {}", e)))?;

        let products = import::parse_csv(&bytes)?;
        return Ok(Json(ImportResponse {
            filename,
            total_products: products.len(),
            products,
        }));
    }

    Err(AppError::ValidationError(
        "Missing 'file' field in upload".to_string(),
    ))
}
