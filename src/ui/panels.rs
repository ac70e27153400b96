//! Widget panels: query bar, metric cards, company info and the
//! quick-stats strip.

use eframe::egui::{ComboBox, Grid, Key, RichText, Spinner, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::api::{Metrics, StockInfo};
use crate::config::plot::PLOT_CONFIG;
use crate::market::{self, MarketStatus};
use crate::ui::app::{QuickView, Timeframe};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::format::{
    ChangeDirection, format_currency, format_market_cap, format_ratio, format_signed_pct,
};

/// Symbol input, timeframe selector and the Analyze trigger.
/// Returns true when a prediction should be submitted.
pub fn render_query_bar(
    ui: &mut Ui,
    symbol_input: &mut String,
    timeframe: &mut Timeframe,
    in_flight: bool,
) -> bool {
    let mut submit = false;

    ui.horizontal(|ui| {
        let response = ui.add(
            TextEdit::singleline(symbol_input)
                .hint_text(UI_TEXT.input_symbol_hint)
                .desired_width(140.0),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submit = true;
        }

        ui.label(UI_TEXT.label_timeframe);
        ComboBox::from_id_salt("timeframe_select")
            .selected_text(timeframe.label())
            .show_ui(ui, |ui| {
                for tf in Timeframe::iter() {
                    ui.selectable_value(timeframe, tf, tf.label());
                }
            });

        if ui.button(UI_TEXT.button_analyze).clicked() {
            submit = true;
        }

        if in_flight {
            ui.add(Spinner::new());
            ui.label(
                RichText::new(UI_TEXT.loading_prediction)
                    .color(PLOT_CONFIG.color_text_subdued),
            );
        }
    });

    submit
}

/// The four metric cards across the top of the results area.
pub fn render_metrics_row(ui: &mut Ui, metrics: &Metrics) {
    ui.columns(4, |cols| {
        metric_card(
            &mut cols[0],
            UI_TEXT.label_current_price,
            metrics.current_price.map(format_currency),
            None,
        );
        metric_card(
            &mut cols[1],
            UI_TEXT.label_predicted_price,
            metrics.predicted_price.map(format_currency),
            None,
        );

        let (change_text, change_dir) = match metrics.price_change {
            Some(change) => {
                let (text, dir) = format_signed_pct(change);
                (Some(text), Some(dir))
            }
            None => (None, None),
        };
        metric_card(
            &mut cols[2],
            UI_TEXT.label_price_change,
            change_text,
            change_dir,
        );

        metric_card(
            &mut cols[3],
            UI_TEXT.label_rsi_value,
            metrics.rsi.map(|r| format!("{:.2}", r)),
            None,
        );
    });
}

fn metric_card(
    ui: &mut Ui,
    label: &str,
    value: Option<String>,
    direction: Option<ChangeDirection>,
) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).color(PLOT_CONFIG.color_text_subdued));
        let text = value.unwrap_or_else(|| UI_TEXT.placeholder_value.to_string());
        let mut rich = RichText::new(text).heading();
        match direction {
            Some(ChangeDirection::Up) => rich = rich.color(PLOT_CONFIG.color_gain),
            Some(ChangeDirection::Down) => rich = rich.color(PLOT_CONFIG.color_loss),
            None => {}
        }
        ui.label(rich);
    });
}

/// Company fundamentals below the charts.
pub fn render_stock_info(ui: &mut Ui, info: &StockInfo) {
    let heading = info
        .name
        .as_deref()
        .unwrap_or(UI_TEXT.heading_company_fallback);
    ui.heading(heading);
    ui.separator();

    Grid::new("stock_info_grid")
        .striped(true)
        .num_columns(2)
        .show(ui, |ui| {
            info_row(ui, UI_TEXT.label_sector, info.sector.as_deref());
            info_row(ui, UI_TEXT.label_industry, info.industry.as_deref());
            info_row(
                ui,
                UI_TEXT.label_market_cap,
                Some(format_market_cap(info.market_cap).as_str()),
            );
            info_row(
                ui,
                UI_TEXT.label_pe_ratio,
                Some(format_ratio(info.pe_ratio).as_str()),
            );
        });

    if let Some(description) = &info.description {
        ui.add_space(8.0);
        ui.label(RichText::new(description).color(PLOT_CONFIG.color_text_subdued));
    }
}

fn info_row(ui: &mut Ui, label: &str, value: Option<&str>) {
    ui.label(RichText::new(label).strong());
    ui.label(value.unwrap_or("N/A"));
    ui.end_row();
}

/// Bottom strip: S&P 500 value, market status and the last-updated stamp.
pub fn render_quick_stats_strip(ui: &mut Ui, quick: &QuickView) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(UI_TEXT.label_sp500).strong());
        match quick.sp500_value {
            Some(v) => ui.label(format_currency(v)),
            None => ui.label(UI_TEXT.placeholder_value),
        };

        ui.separator();

        let status = market::market_status_now();
        let (status_text, status_color) = match status {
            MarketStatus::Open => (UI_TEXT.label_market_open, PLOT_CONFIG.color_market_open),
            MarketStatus::Closed => {
                (UI_TEXT.label_market_closed, PLOT_CONFIG.color_market_closed)
            }
        };
        ui.label(RichText::new(status_text).color(status_color).strong());

        if let Some(updated) = &quick.last_updated {
            ui.separator();
            ui.label(
                RichText::new(format!("{} {}", UI_TEXT.label_last_updated, updated))
                    .color(PLOT_CONFIG.color_text_subdued),
            );
        }
    });
}
