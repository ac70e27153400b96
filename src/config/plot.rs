//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // PRICE CHART
    pub price_line_color: Color32,
    pub price_line_width: f32,
    pub ma_short_color: Color32,
    pub ma_long_color: Color32,
    pub ma_line_width: f32,
    /// Prediction segment when predicted >= last close
    pub prediction_up_color: Color32,
    /// Prediction segment when predicted < last close
    pub prediction_down_color: Color32,
    pub prediction_line_width: f32,

    // RSI CHART
    pub rsi_line_color: Color32,
    pub rsi_line_width: f32,
    pub rsi_overbought_color: Color32,
    pub rsi_oversold_color: Color32,
    pub rsi_band_width: f32,

    // VOLUME CHART
    pub volume_up_color: Color32,
    pub volume_down_color: Color32,
    pub volume_neutral_color: Color32, // First bar has no prior close to compare
    pub volume_bar_width: f64,
    pub volume_bar_opacity: f32,

    // LAYOUT
    pub price_chart_height: f32,
    pub indicator_chart_height: f32,
    pub dash_length: f32,

    // SEMANTIC COLORS
    pub color_gain: Color32,
    pub color_loss: Color32,
    pub color_info: Color32,
    pub color_market_open: Color32,
    pub color_market_closed: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    // Palette carried over from the original dashboard styling
    price_line_color: Color32::from_rgb(33, 150, 243), // Blue
    price_line_width: 2.0,
    ma_short_color: Color32::from_rgb(76, 175, 80), // Green
    ma_long_color: Color32::from_rgb(244, 67, 54),  // Red
    ma_line_width: 1.5,

    prediction_up_color: Color32::from_rgb(76, 175, 80),
    prediction_down_color: Color32::from_rgb(244, 67, 54),
    prediction_line_width: 2.0,

    rsi_line_color: Color32::from_rgb(92, 107, 192), // Indigo
    rsi_line_width: 2.0,
    rsi_overbought_color: Color32::from_rgb(244, 67, 54),
    rsi_oversold_color: Color32::from_rgb(76, 175, 80),
    rsi_band_width: 1.0,

    volume_up_color: Color32::from_rgb(76, 175, 80),
    volume_down_color: Color32::from_rgb(244, 67, 54),
    volume_neutral_color: Color32::from_rgb(144, 202, 249), // Light blue
    volume_bar_width: 0.8,
    volume_bar_opacity: 0.7,

    price_chart_height: 400.0,
    indicator_chart_height: 200.0,
    dash_length: 10.0,

    color_gain: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),
    color_info: Color32::from_rgb(173, 216, 230),
    color_market_open: Color32::from_rgb(76, 175, 80),
    color_market_closed: Color32::from_rgb(239, 83, 80),
    color_text_subdued: Color32::GRAY,
};
