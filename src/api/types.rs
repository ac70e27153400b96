//! Wire model for the prediction backend, plus boundary validation.
//!
//! The backend nulls out NaN values before serializing, and fundamentals that
//! yfinance cannot supply arrive as the literal string "N/A". Everything here
//! decodes leniently and is then checked once by [`PredictionResponse::into_validated`];
//! past that point the UI only ever sees well-shaped data.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 200 with an explicit `error` field.
    #[error("{0}")]
    Backend(String),

    /// Response decoded but its shape is unusable (missing or misaligned series).
    #[error("invalid data: {0}")]
    Shape(String),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub symbol: String,
    pub months: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub current_price: Option<f64>,
    pub predicted_price: Option<f64>,
    pub rsi: Option<f64>,
    pub price_change: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StockInfo {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "de_lenient_number")]
    pub market_cap: Option<f64>,
    #[serde(deserialize_with = "de_lenient_number")]
    pub pe_ratio: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuickStats {
    pub error: Option<String>,
    pub sp500_value: Option<f64>,
    pub timestamp: Option<String>,
}

/// Raw `/predict` body. Every field is optional so a partial or error
/// response still decodes; validation decides what is actually usable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredictionResponse {
    pub error: Option<String>,
    pub dates: Option<Vec<String>>,
    pub prices: Option<Vec<Option<f64>>>,
    pub volume: Option<Vec<Option<f64>>>,
    pub rsi: Option<Vec<Option<f64>>>,
    pub returns: Option<Vec<Option<f64>>>,
    pub metrics: Option<Metrics>,
    pub stock_info: Option<StockInfo>,
}

/// A validated prediction snapshot. `dates` and `prices` are equal-length and
/// fully defined; the optional series are equal-length but may contain gaps.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
    pub volume: Option<Vec<Option<f64>>>,
    pub rsi: Option<Vec<Option<f64>>>,
    pub metrics: Metrics,
    pub stock_info: StockInfo,
}

impl PredictionResponse {
    pub fn into_validated(self) -> Result<Prediction, ApiError> {
        if let Some(msg) = self.error {
            return Err(ApiError::Backend(msg));
        }

        let dates = self.dates.unwrap_or_default();
        let raw_prices = self.prices.unwrap_or_default();

        if dates.is_empty() || raw_prices.is_empty() {
            return Err(ApiError::Shape("missing dates or prices".to_string()));
        }
        if dates.len() != raw_prices.len() {
            return Err(ApiError::Shape(format!(
                "dates ({}) and prices ({}) differ in length",
                dates.len(),
                raw_prices.len()
            )));
        }

        let prices = raw_prices
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                p.filter(|v| v.is_finite())
                    .ok_or_else(|| ApiError::Shape(format!("price at index {i} is null")))
            })
            .collect::<Result<Vec<f64>, ApiError>>()?;

        check_series_len("volume", &self.volume, dates.len())?;
        check_series_len("rsi", &self.rsi, dates.len())?;
        check_series_len("returns", &self.returns, dates.len())?;

        Ok(Prediction {
            dates,
            prices,
            volume: self.volume,
            rsi: self.rsi,
            metrics: self.metrics.unwrap_or_default(),
            stock_info: self.stock_info.unwrap_or_default(),
        })
    }
}

fn check_series_len(
    name: &str,
    series: &Option<Vec<Option<f64>>>,
    expected: usize,
) -> Result<(), ApiError> {
    if let Some(s) = series {
        if s.len() != expected {
            return Err(ApiError::Shape(format!(
                "{name} ({}) does not match dates ({expected}) in length",
                s.len()
            )));
        }
    }
    Ok(())
}

/// Accepts a number, the string "N/A" (or any other text), or null.
/// Anything non-numeric collapses to `None`.
fn de_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Num(f64),
        Text(String),
    }

    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Num(n)) if n.is_finite() => Some(n),
        _ => None,
    })
}
