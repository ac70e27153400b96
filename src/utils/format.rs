//! Display formatting for prices, percentages and company fundamentals.

/// Styling classification for the price-change widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
}

/// Fixed two-decimal dollar rendering ($1234.56).
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Market cap with a magnitude suffix.
/// >= 1e12 -> "T", [1e9, 1e12) -> "B", [1e6, 1e9) -> "M", else raw dollars.
/// Missing or non-numeric input renders the literal "N/A".
pub fn format_market_cap(value: Option<f64>) -> String {
    let Some(v) = value else {
        return "N/A".to_string();
    };
    if !v.is_finite() {
        return "N/A".to_string();
    }

    if v >= 1e12 {
        format!("${:.2}T", v / 1e12)
    } else if v >= 1e9 {
        format!("${:.2}B", v / 1e9)
    } else if v >= 1e6 {
        format!("${:.2}M", v / 1e6)
    } else {
        format!("${:.2}", v)
    }
}

/// Percentage change with an explicit `+` for non-negative values,
/// plus the direction token that drives the widget color.
pub fn format_signed_pct(change: f64) -> (String, ChangeDirection) {
    if change >= 0.0 {
        (format!("+{:.2}%", change), ChangeDirection::Up)
    } else {
        (format!("{:.2}%", change), ChangeDirection::Down)
    }
}

/// Plain two-decimal rendering for ratios (P/E, RSI readout).
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => "N/A".to_string(),
    }
}
