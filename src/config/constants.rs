//! Compile-time knobs shared across the app.

/// Where the prediction backend lives unless `--backend-url` says otherwise.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Quick-stats refresh cadence (matches the original 60s page timer).
pub const DEFAULT_REFRESH_SECS: u64 = 60;

pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Moving-average windows overlaid on the price chart
pub const MA_SHORT_PERIOD: usize = 20;
pub const MA_LONG_PERIOD: usize = 50;

// RSI reference bands
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

// Regular session, minutes since local midnight (09:30 - 16:00).
// Local wall clock only: no holiday calendar, no exchange timezone.
pub const MARKET_OPEN_MINUTES: u32 = 9 * 60 + 30;
pub const MARKET_CLOSE_MINUTES: u32 = 16 * 60;

/// How long a toast notification stays on screen.
pub const NOTIFICATION_TTL_MS: i64 = 5_000;
