//! Chart construction for the three dashboard plots.
//!
//! `ChartData` is built once per prediction snapshot; the render functions
//! turn it into egui_plot items every frame. The x axis is the sample index
//! and an axis formatter maps indices back to the backend's date strings,
//! with one extra slot past the end for the synthesized prediction date.

use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{
    Axis, AxisHints, Bar, BarChart, Corner, HLine, Legend, Line, LineStyle, Plot,
    PlotPoint, PlotPoints, Text,
};

use crate::analysis::moving_average;
use crate::api::Prediction;
use crate::config::constants::{
    MA_LONG_PERIOD, MA_SHORT_PERIOD, RSI_OVERBOUGHT, RSI_OVERSOLD,
};
use crate::config::plot::PLOT_CONFIG;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::format::format_currency;
use crate::utils::time_utils;

/// The dashed two-point line from the last close to the predicted price.
#[derive(Debug, Clone)]
pub struct PredictionSegment {
    pub points: [[f64; 2]; 2],
    pub color: Color32,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct VolumeBar {
    pub x: f64,
    pub value: f64,
    pub color: Color32,
}

/// Precomputed plot series for one validated prediction.
pub struct ChartData {
    pub dates: Vec<String>,
    pub prediction_date: Option<String>,
    pub prices: Vec<[f64; 2]>,
    pub ma_short: Vec<[f64; 2]>,
    pub ma_long: Vec<[f64; 2]>,
    pub prediction_segment: Option<PredictionSegment>,
    /// Contiguous runs; nulls on the wire become gaps between runs.
    pub rsi_runs: Option<Vec<Vec<[f64; 2]>>>,
    pub volume_bars: Option<Vec<VolumeBar>>,
}

impl ChartData {
    pub fn build(p: &Prediction) -> Self {
        let prices: Vec<[f64; 2]> = p
            .prices
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect();

        let ma_short = defined_points(&moving_average(&p.prices, MA_SHORT_PERIOD));
        let ma_long = defined_points(&moving_average(&p.prices, MA_LONG_PERIOD));

        let prediction_segment = build_prediction_segment(p);
        let prediction_date = p
            .dates
            .last()
            .and_then(|d| time_utils::next_day_string(d));

        // RSI lives on a fixed 0-100 axis; out-of-range values are clamped
        // rather than allowed to stretch it.
        let rsi_runs = p.rsi.as_ref().map(|s| {
            let clamped: Vec<Option<f64>> =
                s.iter().map(|v| v.map(|v| v.clamp(0.0, 100.0))).collect();
            split_runs(&clamped)
        });
        let volume_bars = p.volume.as_ref().map(|s| build_volume_bars(s, &p.prices));

        Self {
            dates: p.dates.clone(),
            prediction_date,
            prices,
            ma_short,
            ma_long,
            prediction_segment,
            rsi_runs,
            volume_bars,
        }
    }
}

fn build_prediction_segment(p: &Prediction) -> Option<PredictionSegment> {
    let last_price = *p.prices.last()?;
    let predicted = p.metrics.predicted_price?;
    let x_last = (p.prices.len() - 1) as f64;

    let color = if predicted >= last_price {
        PLOT_CONFIG.prediction_up_color
    } else {
        PLOT_CONFIG.prediction_down_color
    };

    Some(PredictionSegment {
        points: [[x_last, last_price], [x_last + 1.0, predicted]],
        color,
        label: format!(
            "{} {}",
            UI_TEXT.label_predicted_prefix,
            format_currency(predicted)
        ),
    })
}

/// Drop the undefined prefix (and any other gaps) of an indicator series.
fn defined_points(series: &[Option<f64>]) -> Vec<[f64; 2]> {
    series
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| [i as f64, v]))
        .collect()
}

/// Split a gappy series into contiguous runs so gaps stay visible.
fn split_runs(series: &[Option<f64>]) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();

    for (i, v) in series.iter().enumerate() {
        match v {
            Some(v) if v.is_finite() => current.push([i as f64, *v]),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Per-bar coloring: first bar neutral, then up/down against the prior close.
fn build_volume_bars(volume: &[Option<f64>], prices: &[f64]) -> Vec<VolumeBar> {
    volume
        .iter()
        .enumerate()
        .filter_map(|(i, v)| {
            let value = v.filter(|v| v.is_finite())?;
            let base = if i == 0 || i >= prices.len() {
                PLOT_CONFIG.volume_neutral_color
            } else if prices[i] > prices[i - 1] {
                PLOT_CONFIG.volume_up_color
            } else {
                PLOT_CONFIG.volume_down_color
            };
            Some(VolumeBar {
                x: i as f64,
                value,
                color: base.linear_multiply(PLOT_CONFIG.volume_bar_opacity),
            })
        })
        .collect()
}

/// Axis hints mapping sample indices back to date labels. Index `len` is the
/// synthesized prediction date.
fn date_axis(dates: Vec<String>, prediction_date: Option<String>) -> AxisHints<'static> {
    AxisHints::new(Axis::X).formatter(move |mark, _range| {
        let rounded = mark.value.round();
        if (mark.value - rounded).abs() > 0.25 || rounded < 0.0 {
            return String::new();
        }
        let idx = rounded as usize;
        if idx < dates.len() {
            dates[idx].clone()
        } else if idx == dates.len() {
            prediction_date.clone().unwrap_or_default()
        } else {
            String::new()
        }
    })
}

pub fn render_price_chart(ui: &mut Ui, data: &ChartData) {
    Plot::new("price_chart")
        .height(PLOT_CONFIG.price_chart_height)
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![date_axis(
            data.dates.clone(),
            data.prediction_date.clone(),
        )])
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(UI_TEXT.series_price, PlotPoints::new(data.prices.clone()))
                    .color(PLOT_CONFIG.price_line_color)
                    .width(PLOT_CONFIG.price_line_width),
            );

            if !data.ma_short.is_empty() {
                plot_ui.line(
                    Line::new(
                        UI_TEXT.series_ma_short,
                        PlotPoints::new(data.ma_short.clone()),
                    )
                    .color(PLOT_CONFIG.ma_short_color)
                    .width(PLOT_CONFIG.ma_line_width),
                );
            }
            if !data.ma_long.is_empty() {
                plot_ui.line(
                    Line::new(
                        UI_TEXT.series_ma_long,
                        PlotPoints::new(data.ma_long.clone()),
                    )
                    .color(PLOT_CONFIG.ma_long_color)
                    .width(PLOT_CONFIG.ma_line_width),
                );
            }

            if let Some(seg) = &data.prediction_segment {
                plot_ui.line(
                    Line::new(
                        UI_TEXT.series_prediction,
                        PlotPoints::new(seg.points.to_vec()),
                    )
                    .color(seg.color)
                    .width(PLOT_CONFIG.prediction_line_width)
                    .style(LineStyle::Dashed {
                        length: PLOT_CONFIG.dash_length,
                    }),
                );
                plot_ui.text(
                    Text::new(
                        "prediction_label",
                        PlotPoint::new(seg.points[1][0], seg.points[1][1]),
                        RichText::new(&seg.label).color(seg.color).strong(),
                    )
                    .anchor(Align2::RIGHT_BOTTOM),
                );
            }
        });
}

/// Only rendered when an RSI series was supplied.
pub fn render_rsi_chart(ui: &mut Ui, data: &ChartData) {
    let Some(runs) = &data.rsi_runs else {
        return;
    };

    Plot::new("rsi_chart")
        .height(PLOT_CONFIG.indicator_chart_height)
        .default_y_bounds(0.0, 100.0)
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![date_axis(data.dates.clone(), None)])
        .show(ui, |plot_ui| {
            for run in runs {
                plot_ui.line(
                    Line::new(UI_TEXT.series_rsi, PlotPoints::new(run.clone()))
                        .color(PLOT_CONFIG.rsi_line_color)
                        .width(PLOT_CONFIG.rsi_line_width),
                );
            }

            plot_ui.hline(
                HLine::new(UI_TEXT.band_overbought, RSI_OVERBOUGHT)
                    .color(PLOT_CONFIG.rsi_overbought_color)
                    .width(PLOT_CONFIG.rsi_band_width)
                    .style(LineStyle::Dashed {
                        length: PLOT_CONFIG.dash_length,
                    }),
            );
            plot_ui.hline(
                HLine::new(UI_TEXT.band_oversold, RSI_OVERSOLD)
                    .color(PLOT_CONFIG.rsi_oversold_color)
                    .width(PLOT_CONFIG.rsi_band_width)
                    .style(LineStyle::Dashed {
                        length: PLOT_CONFIG.dash_length,
                    }),
            );
        });
}

/// Only rendered when a volume series was supplied.
pub fn render_volume_chart(ui: &mut Ui, data: &ChartData) {
    let Some(bars) = &data.volume_bars else {
        return;
    };

    let chart_bars: Vec<Bar> = bars
        .iter()
        .map(|b| {
            Bar::new(b.x, b.value)
                .width(PLOT_CONFIG.volume_bar_width)
                .fill(b.color)
        })
        .collect();

    Plot::new("volume_chart")
        .height(PLOT_CONFIG.indicator_chart_height)
        .include_y(0.0)
        .legend(Legend::default().position(Corner::LeftTop))
        .custom_x_axes(vec![date_axis(data.dates.clone(), None)])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(UI_TEXT.series_volume, chart_bars));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Metrics, StockInfo};

    fn prediction(
        prices: Vec<f64>,
        rsi: Option<Vec<Option<f64>>>,
        volume: Option<Vec<Option<f64>>>,
        predicted: Option<f64>,
    ) -> Prediction {
        let dates = (0..prices.len())
            .map(|i| format!("2024-01-{:02}", i + 1))
            .collect();
        Prediction {
            dates,
            prices,
            volume,
            rsi,
            metrics: Metrics {
                predicted_price: predicted,
                ..Default::default()
            },
            stock_info: StockInfo::default(),
        }
    }

    #[test]
    fn optional_series_stay_optional() {
        let data = ChartData::build(&prediction(vec![10.0, 20.0, 15.0], None, None, Some(16.0)));
        assert!(data.rsi_runs.is_none());
        assert!(data.volume_bars.is_none());
        assert_eq!(data.prices.len(), 3);
    }

    #[test]
    fn prediction_segment_connects_last_close_to_next_day() {
        let data = ChartData::build(&prediction(vec![10.0, 20.0, 15.0], None, None, Some(16.0)));
        let seg = data.prediction_segment.expect("segment should exist");
        assert_eq!(seg.points, [[2.0, 15.0], [3.0, 16.0]]);
        assert_eq!(seg.color, PLOT_CONFIG.prediction_up_color);
        assert_eq!(seg.label, "Predicted: $16.00");
        assert_eq!(data.prediction_date.as_deref(), Some("2024-01-04"));
    }

    #[test]
    fn bearish_prediction_is_red() {
        let data = ChartData::build(&prediction(vec![10.0, 20.0], None, None, Some(5.0)));
        let seg = data.prediction_segment.unwrap();
        assert_eq!(seg.color, PLOT_CONFIG.prediction_down_color);
    }

    #[test]
    fn missing_predicted_price_means_no_segment() {
        let data = ChartData::build(&prediction(vec![10.0, 20.0], None, None, None));
        assert!(data.prediction_segment.is_none());
    }

    #[test]
    fn ma_series_skip_undefined_prefix() {
        let prices: Vec<f64> = (0..60).map(|i| i as f64).collect();
        let data = ChartData::build(&prediction(prices, None, None, None));
        assert_eq!(data.ma_short.len(), 60 - (MA_SHORT_PERIOD - 1));
        assert_eq!(data.ma_long.len(), 60 - (MA_LONG_PERIOD - 1));
        assert_eq!(data.ma_short[0][0], (MA_SHORT_PERIOD - 1) as f64);
    }

    #[test]
    fn rsi_nulls_split_into_runs() {
        let rsi = vec![Some(50.0), None, Some(60.0), Some(61.0)];
        let data = ChartData::build(&prediction(
            vec![1.0, 2.0, 3.0, 4.0],
            Some(rsi),
            None,
            None,
        ));
        let runs = data.rsi_runs.unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![[0.0, 50.0]]);
        assert_eq!(runs[1], vec![[2.0, 60.0], [3.0, 61.0]]);
    }

    #[test]
    fn rsi_values_are_clamped_to_the_fixed_axis() {
        let rsi = vec![Some(-5.0), Some(50.0), Some(130.0)];
        let data = ChartData::build(&prediction(
            vec![1.0, 2.0, 3.0],
            Some(rsi),
            None,
            None,
        ));
        let runs = data.rsi_runs.unwrap();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], vec![[0.0, 0.0], [1.0, 50.0], [2.0, 100.0]]);
    }

    #[test]
    fn volume_bars_color_by_price_direction() {
        let volume = vec![Some(100.0), Some(200.0), Some(300.0)];
        let data = ChartData::build(&prediction(
            vec![10.0, 12.0, 11.0],
            None,
            Some(volume),
            None,
        ));
        let bars = data.volume_bars.unwrap();
        assert_eq!(bars.len(), 3);
        let neutral = PLOT_CONFIG
            .volume_neutral_color
            .linear_multiply(PLOT_CONFIG.volume_bar_opacity);
        let up = PLOT_CONFIG
            .volume_up_color
            .linear_multiply(PLOT_CONFIG.volume_bar_opacity);
        let down = PLOT_CONFIG
            .volume_down_color
            .linear_multiply(PLOT_CONFIG.volume_bar_opacity);
        assert_eq!(bars[0].color, neutral); // no prior close
        assert_eq!(bars[1].color, up);
        assert_eq!(bars[2].color, down);
    }
}
