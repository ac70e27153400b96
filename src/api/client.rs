use std::time::Duration;

use reqwest::Client;

use crate::config::constants::HTTP_TIMEOUT_SECS;

use super::types::{ApiError, PredictRequest, PredictionResponse, QuickStats};

/// Thin HTTP client for the two backend endpoints. Cheap to clone; the
/// background worker owns the only long-lived copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST /predict with `{symbol, months}`. Returns the raw wire body;
    /// callers validate it before use.
    pub async fn predict(
        &self,
        symbol: &str,
        months: u32,
    ) -> Result<PredictionResponse, ApiError> {
        let url = format!("{}/predict", self.base_url);
        let body = PredictRequest {
            symbol: symbol.to_string(),
            months,
        };

        let resp = self.http.post(&url).json(&body).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.json::<PredictionResponse>().await?)
    }

    /// GET /quick_stats. A body-level `error` field is promoted to a real error.
    pub async fn quick_stats(&self) -> Result<QuickStats, ApiError> {
        let url = format!("{}/quick_stats", self.base_url);

        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        let stats = resp.json::<QuickStats>().await?;
        match stats.error {
            Some(msg) => Err(ApiError::Backend(msg)),
            None => Ok(stats),
        }
    }
}
