//! Demand prediction service.
//!
//! Prefers the remote model when one is configured and quietly falls back to
//! the built-in heuristic estimator when it is unreachable, so the endpoint
//! keeps working without the model service running.

use rust_decimal::Decimal;

use shared::demand::{lookup, prediction_with_score, round2f, DemandEstimator, HeuristicEstimator};
use shared::import::ImportedProduct;
use shared::models::{
    BatchPrediction, BatchPredictionItem, BatchSummary, DemandPrediction, Season, WeatherCondition,
};

use crate::config::DemandConfig;
use crate::error::{AppError, AppResult};
use crate::external::demand::RemoteDemandClient;

/// Demand prediction service
#[derive(Clone)]
pub struct DemandService {
    remote: Option<RemoteDemandClient>,
    heuristic: HeuristicEstimator,
}

impl DemandService {
    /// Create a new DemandService from configuration
    pub fn new(config: &DemandConfig) -> Self {
        Self {
            remote: config
                .endpoint
                .as_ref()
                .map(|endpoint| RemoteDemandClient::new(endpoint.clone())),
            heuristic: HeuristicEstimator,
        }
    }

    /// Predict demand for one product
    pub async fn predict(
        &self,
        product: &str,
        season: Season,
        weather: WeatherCondition,
    ) -> AppResult<DemandPrediction> {
        let entry = lookup(product)
            .ok_or_else(|| AppError::NotFound(format!("Product '{}'", product)))?;

        if let Some(remote) = &self.remote {
            match remote.predict_score(product, season, weather).await {
                Ok(score) => {
                    return Ok(prediction_with_score(entry, season, weather, round2f(score)));
                }
                Err(err) => {
                    tracing::warn!("Remote demand model unavailable, using heuristic: {}", err);
                }
            }
        }

        self.heuristic
            .estimate(product, season, weather)
            .ok_or_else(|| AppError::NotFound(format!("Product '{}'", product)))
    }

    /// Predict demand for a batch of uploaded products. Unknown products are
    /// skipped with a warning; the result is sorted by score descending.
    pub async fn predict_batch(
        &self,
        products: Vec<ImportedProduct>,
        season: Season,
        weather: WeatherCondition,
    ) -> AppResult<BatchPrediction> {
        let mut items = Vec::with_capacity(products.len());

        for product in products {
            let prediction = match self.predict(&product.name, season, weather).await {
                Ok(prediction) => prediction,
                Err(AppError::NotFound(_)) => {
                    tracing::warn!("Skipping unknown product in batch: {}", product.name);
                    continue;
                }
                Err(err) => return Err(err),
            };

            let estimated_cost = shared::analyzer::round2(
                product.cost_per_unit * Decimal::from(prediction.recommended_stock),
            );
            items.push(BatchPredictionItem {
                prediction,
                cost_per_unit: product.cost_per_unit,
                estimated_cost,
            });
        }

        if items.is_empty() {
            return Err(AppError::ValidationError(
                "No recognized products in batch".to_string(),
            ));
        }

        items.sort_by(|a, b| {
            b.prediction
                .demand_score
                .partial_cmp(&a.prediction.demand_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let total_products = items.len();
        let high_demand_count = items
            .iter()
            .filter(|i| i.prediction.demand_score > 120.0)
            .count();
        let low_demand_count = items
            .iter()
            .filter(|i| i.prediction.demand_score < 60.0)
            .count();
        let total_estimated_cost = shared::analyzer::round2(
            items.iter().map(|i| i.estimated_cost).sum::<Decimal>(),
        );
        let average_demand_score = round2f(
            items.iter().map(|i| i.prediction.demand_score).sum::<f64>() / total_products as f64,
        );

        Ok(BatchPrediction {
            predictions: items,
            summary: BatchSummary {
                total_products,
                high_demand_count,
                low_demand_count,
                total_estimated_cost,
                average_demand_score,
            },
        })
    }
}
