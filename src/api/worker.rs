use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Instant;

use tokio::runtime::Runtime;

use super::client::ApiClient;
use super::types::{ApiError, Prediction, QuickStats};

/// A request for the background API worker.
#[derive(Debug, Clone)]
pub enum ApiJob {
    Predict { symbol: String, months: u32 },
    QuickStats,
}

/// The result sent back to the UI thread.
#[derive(Debug)]
pub enum ApiEvent {
    Prediction {
        symbol: String,
        result: Result<Prediction, ApiError>,
        duration_ms: u128,
    },
    QuickStats(Result<QuickStats, ApiError>),
}

/// Spawns the background thread that owns the HTTP runtime and processes
/// jobs sequentially. Jobs are never retried or cancelled; rapid repeated
/// submissions simply queue and their events apply in arrival order.
pub fn spawn_worker_thread(client: ApiClient, rx: Receiver<ApiJob>, tx: Sender<ApiEvent>) {
    thread::spawn(move || {
        let rt = match Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("API worker: failed to create runtime: {e}");
                return;
            }
        };

        while let Ok(job) = rx.recv() {
            let event = rt.block_on(process_job(&client, job));
            if tx.send(event).is_err() {
                break; // UI is gone
            }
        }
    });
}

async fn process_job(client: &ApiClient, job: ApiJob) -> ApiEvent {
    match job {
        ApiJob::Predict { symbol, months } => {
            let start = Instant::now();
            let result = client
                .predict(&symbol, months)
                .await
                .and_then(|raw| raw.into_validated());
            let duration_ms = start.elapsed().as_millis();

            match &result {
                Ok(p) => log::info!(
                    "predict [{symbol}]: {} samples in {duration_ms}ms",
                    p.prices.len()
                ),
                Err(e) => log::warn!("predict [{symbol}]: {e}"),
            }

            ApiEvent::Prediction {
                symbol,
                result,
                duration_ms,
            }
        }
        ApiJob::QuickStats => ApiEvent::QuickStats(client.quick_stats().await),
    }
}
