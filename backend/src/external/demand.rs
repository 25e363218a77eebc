//! Remote demand model client
//!
//! Talks to an externally hosted prediction service. Only the score is
//! consumed; recommendations are derived locally so both estimation paths
//! report through the same bands.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use shared::models::{Season, WeatherCondition};

use crate::error::{AppError, AppResult};

/// Client for the remote demand prediction service
#[derive(Clone)]
pub struct RemoteDemandClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    product: &'a str,
    season: Season,
    weather: WeatherCondition,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predicted_demand_score: f64,
}

impl RemoteDemandClient {
    /// Create a new RemoteDemandClient
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the predicted demand score for one product
    pub async fn predict_score(
        &self,
        product: &str,
        season: Season,
        weather: WeatherCondition,
    ) -> AppResult<f64> {
        let url = format!("{}/predict-demand", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&PredictRequest {
                product,
                season,
                weather,
            })
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Demand model request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Demand model error: {} - {}",
                status, body
            )));
        }

        let data: PredictResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse demand response: {}", e))
        })?;

        Ok(data.predicted_demand_score)
    }
}
