// Core modules
pub mod analysis;
pub mod api;
pub mod config;
pub mod market;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use api::{ApiClient, ApiError, Prediction};
pub use ui::StockScopeApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the prediction backend
    #[arg(long, default_value = config::constants::DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Seconds between quick-stats refreshes
    #[arg(long, default_value_t = config::constants::DEFAULT_REFRESH_SECS)]
    pub refresh_secs: u64,
}

/// Main application entry point - creates the GUI app.
/// This is the public API for the binary to call.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> StockScopeApp {
    StockScopeApp::new(cc, args)
}
