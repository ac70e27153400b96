mod client;
mod types;
mod worker;

pub use client::ApiClient;
pub use types::{
    ApiError, Metrics, Prediction, PredictionResponse, QuickStats, StockInfo,
};
pub use worker::{ApiEvent, ApiJob, spawn_worker_thread};
