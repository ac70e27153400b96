//! All user-facing strings in one place.

pub struct UiText {
    // --- Query bar ---
    pub input_symbol_hint: &'static str,
    pub label_timeframe: &'static str,
    pub button_analyze: &'static str,
    pub loading_prediction: &'static str,

    // --- Metric widgets ---
    pub label_current_price: &'static str,
    pub label_predicted_price: &'static str,
    pub label_rsi_value: &'static str,
    pub label_price_change: &'static str,

    // --- Company panel ---
    pub heading_company_fallback: &'static str,
    pub label_sector: &'static str,
    pub label_industry: &'static str,
    pub label_market_cap: &'static str,
    pub label_pe_ratio: &'static str,

    // --- Quick-stats strip ---
    pub label_sp500: &'static str,
    pub label_market_open: &'static str,
    pub label_market_closed: &'static str,
    pub label_last_updated: &'static str,

    // --- Chart series names ---
    pub series_price: &'static str,
    pub series_ma_short: &'static str,
    pub series_ma_long: &'static str,
    pub series_prediction: &'static str,
    pub series_rsi: &'static str,
    pub series_volume: &'static str,
    pub band_overbought: &'static str,
    pub band_oversold: &'static str,
    pub label_predicted_prefix: &'static str,

    // --- Notifications ---
    pub notify_empty_symbol: &'static str,
    pub notify_fetch_failed: &'static str,
    pub notify_invalid_data: &'static str,
    pub notify_no_backend: &'static str,

    // --- Misc ---
    pub placeholder_value: &'static str,
    pub empty_state_hint: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    input_symbol_hint: "Symbol (e.g. AAPL)",
    label_timeframe: "Timeframe",
    button_analyze: "Analyze",
    loading_prediction: "Fetching prediction...",

    label_current_price: "Current Price",
    label_predicted_price: "Predicted Price",
    label_rsi_value: "RSI (14)",
    label_price_change: "Daily Change",

    heading_company_fallback: "Stock Info",
    label_sector: "Sector",
    label_industry: "Industry",
    label_market_cap: "Market Cap",
    label_pe_ratio: "P/E Ratio",

    label_sp500: "S&P 500",
    label_market_open: "Market Open",
    label_market_closed: "Market Closed",
    label_last_updated: "Updated",

    series_price: "Price",
    series_ma_short: "20 MA",
    series_ma_long: "50 MA",
    series_prediction: "Prediction",
    series_rsi: "RSI",
    series_volume: "Volume",
    band_overbought: "Overbought",
    band_oversold: "Oversold",
    label_predicted_prefix: "Predicted:",

    notify_empty_symbol: "Please enter a stock symbol",
    notify_fetch_failed: "Error fetching data",
    notify_invalid_data: "Invalid data received from server",
    notify_no_backend: "Backend client unavailable; check --backend-url",

    placeholder_value: "--",
    empty_state_hint: "Enter a symbol above and hit Analyze to load a prediction.",
};
