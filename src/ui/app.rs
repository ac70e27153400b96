use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use chrono::Local;
use eframe::egui::{CentralPanel, Context, ScrollArea, TopBottomPanel};
use eframe::{Frame, Storage};
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::Cli;
use crate::api::{ApiClient, ApiError, ApiEvent, ApiJob, Prediction, spawn_worker_thread};
use crate::config::constants::DEFAULT_REFRESH_SECS;
use crate::ui::charts::{self, ChartData};
use crate::ui::notifications::NotificationState;
use crate::ui::panels;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::time_utils;

/// Prediction horizon selector, mirroring the original page's dropdown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter,
)]
pub enum Timeframe {
    OneMonth,
    ThreeMonths,
    #[default]
    SixMonths,
    TwelveMonths,
}

impl Timeframe {
    pub fn months(self) -> u32 {
        match self {
            Timeframe::OneMonth => 1,
            Timeframe::ThreeMonths => 3,
            Timeframe::SixMonths => 6,
            Timeframe::TwelveMonths => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1 Month",
            Timeframe::ThreeMonths => "3 Months",
            Timeframe::SixMonths => "6 Months",
            Timeframe::TwelveMonths => "12 Months",
        }
    }
}

/// Owns the quick-stats refresh schedule. Pure over epoch millis so the
/// cadence is testable without waiting on a real clock. Fires immediately
/// on the first poll, then once per period.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RefreshTimer {
    period_ms: i64,
    last_fired_ms: Option<i64>,
}

impl RefreshTimer {
    pub fn new(period_ms: i64) -> Self {
        Self {
            period_ms,
            last_fired_ms: None,
        }
    }

    pub fn due(&mut self, now_ms: i64) -> bool {
        match self.last_fired_ms {
            Some(last) if now_ms - last < self.period_ms => false,
            _ => {
                self.last_fired_ms = Some(now_ms);
                true
            }
        }
    }
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_SECS as i64 * 1000)
    }
}

/// Latest quick-stats view. The S&P value survives a failed refresh.
#[derive(Debug, Clone, Default)]
pub struct QuickView {
    pub sp500_value: Option<f64>,
    pub last_updated: Option<String>,
}

/// One loaded prediction plus its precomputed chart series.
pub(crate) struct Snapshot {
    pub symbol: String,
    pub prediction: Prediction,
    pub charts: ChartData,
}

impl Snapshot {
    fn new(symbol: String, prediction: Prediction) -> Self {
        let charts = ChartData::build(&prediction);
        Self {
            symbol,
            prediction,
            charts,
        }
    }
}

/// Channel ends for talking to the background API worker.
pub(crate) struct WorkerHandle {
    pub job_tx: Sender<ApiJob>,
    pub event_rx: Receiver<ApiEvent>,
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct StockScopeApp {
    // Persisted user intent (thin, serializable)
    pub(crate) symbol_input: String,
    pub(crate) timeframe: Timeframe,

    #[serde(skip)]
    pub(crate) worker: Option<WorkerHandle>,
    #[serde(skip)]
    pub(crate) in_flight: bool,
    #[serde(skip)]
    pub(crate) snapshot: Option<Snapshot>,
    #[serde(skip)]
    pub(crate) quick: QuickView,
    #[serde(skip)]
    pub(crate) notifications: NotificationState,
    #[serde(skip)]
    pub(crate) refresh: RefreshTimer,
}

impl Default for StockScopeApp {
    fn default() -> Self {
        Self {
            symbol_input: String::new(),
            timeframe: Timeframe::default(),
            worker: None,
            in_flight: false,
            snapshot: None,
            quick: QuickView::default(),
            notifications: NotificationState::default(),
            refresh: RefreshTimer::default(),
        }
    }
}

impl StockScopeApp {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: StockScopeApp = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.refresh = RefreshTimer::new((args.refresh_secs as i64).saturating_mul(1000));

        let (job_tx, job_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        match ApiClient::new(&args.backend_url) {
            Ok(client) => {
                spawn_worker_thread(client, job_rx, event_tx);
                app.worker = Some(WorkerHandle { job_tx, event_rx });
            }
            Err(e) => {
                log::error!("failed to build HTTP client for {}: {e}", args.backend_url);
                app.notifications.push_error(UI_TEXT.notify_no_backend);
            }
        }

        app
    }

    /// Validate the symbol input and queue a prediction request.
    /// An empty symbol never reaches the network.
    pub(crate) fn submit_prediction(&mut self) {
        let symbol = self.symbol_input.trim().to_uppercase();
        if symbol.is_empty() {
            self.notifications.push_error(UI_TEXT.notify_empty_symbol);
            return;
        }
        // Reflect the normalization the backend applies anyway
        self.symbol_input = symbol.clone();

        let months = self.timeframe.months();
        if self.send_job(ApiJob::Predict { symbol, months }) {
            self.in_flight = true;
        }
    }

    fn send_job(&mut self, job: ApiJob) -> bool {
        let Some(worker) = &self.worker else {
            return false;
        };
        if worker.job_tx.send(job).is_err() {
            log::error!("API worker is gone; request dropped");
            return false;
        }
        true
    }

    fn drain_events(&mut self) {
        let events: Vec<ApiEvent> = match &self.worker {
            Some(worker) => worker.event_rx.try_iter().collect(),
            None => return,
        };
        for event in events {
            self.apply_event(event);
        }
    }

    /// Apply one worker event to the view state. Kept free of egui calls so
    /// the error paths are unit-testable.
    pub(crate) fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Prediction {
                symbol,
                result,
                duration_ms,
            } => {
                // Loading indicator clears on success and failure alike
                self.in_flight = false;
                match result {
                    Ok(prediction) => {
                        log::info!("prediction [{symbol}] applied after {duration_ms}ms");
                        self.notifications.push_info(format!(
                            "{symbol}: loaded {} sessions",
                            prediction.dates.len()
                        ));
                        self.snapshot = Some(Snapshot::new(symbol, prediction));
                    }
                    Err(ApiError::Backend(msg)) => {
                        self.notifications.push_error(msg);
                    }
                    Err(ApiError::Shape(detail)) => {
                        log::error!("predict [{symbol}]: malformed response: {detail}");
                        self.notifications.push_error(UI_TEXT.notify_invalid_data);
                    }
                    Err(e) => {
                        log::error!("predict [{symbol}]: {e}");
                        self.notifications.push_error(UI_TEXT.notify_fetch_failed);
                    }
                }
            }
            ApiEvent::QuickStats(result) => match result {
                Ok(stats) => {
                    if stats.sp500_value.is_some() {
                        self.quick.sp500_value = stats.sp500_value;
                    }
                    self.quick.last_updated =
                        Some(time_utils::format_local_time(Local::now()));
                }
                // Status refreshes fail silently; the strip keeps its last value
                Err(e) => log::warn!("quick stats refresh failed: {e}"),
            },
        }
    }

    fn tick_refresh(&mut self) {
        if self.refresh.due(time_utils::local_now_as_timestamp_ms()) {
            self.send_job(ApiJob::QuickStats);
        }
    }
}

impl eframe::App for StockScopeApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.drain_events();
        self.tick_refresh();

        TopBottomPanel::top("query_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            let submit = panels::render_query_bar(
                ui,
                &mut self.symbol_input,
                &mut self.timeframe,
                self.in_flight,
            );
            ui.add_space(6.0);
            if submit {
                self.submit_prediction();
            }
        });

        TopBottomPanel::bottom("quick_stats_strip").show(ctx, |ui| {
            ui.add_space(4.0);
            panels::render_quick_stats_strip(ui, &self.quick);
            ui.add_space(4.0);
        });

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                match &self.snapshot {
                    Some(snap) => {
                        ui.heading(&snap.symbol);
                        ui.add_space(4.0);
                        panels::render_metrics_row(ui, &snap.prediction.metrics);
                        ui.add_space(8.0);
                        charts::render_price_chart(ui, &snap.charts);
                        charts::render_rsi_chart(ui, &snap.charts);
                        charts::render_volume_chart(ui, &snap.charts);
                        ui.add_space(8.0);
                        panels::render_stock_info(ui, &snap.prediction.stock_info);
                    }
                    None => {
                        ui.add_space(24.0);
                        ui.vertical_centered(|ui| {
                            ui.label(UI_TEXT.empty_state_hint);
                        });
                    }
                }
            });
        });

        self.notifications.render(ctx);

        // Keep the refresh timer ticking even with no user input
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Metrics, PredictionResponse, StockInfo};
    use crate::ui::notifications::NotificationKind;

    fn valid_prediction() -> Prediction {
        Prediction {
            dates: vec!["2024-01-02".into(), "2024-01-03".into()],
            prices: vec![100.0, 101.0],
            volume: None,
            rsi: None,
            metrics: Metrics::default(),
            stock_info: StockInfo::default(),
        }
    }

    #[test]
    fn refresh_timer_fires_immediately_then_respects_period() {
        let mut timer = RefreshTimer::new(60_000);
        assert!(timer.due(1_000));
        assert!(!timer.due(1_001));
        assert!(!timer.due(60_999));
        assert!(timer.due(61_000));
        assert!(!timer.due(61_001));
    }

    #[test]
    fn empty_symbol_is_rejected_before_any_request() {
        let mut app = StockScopeApp::default();
        app.symbol_input = "   ".to_string();
        app.submit_prediction();
        assert!(!app.in_flight);
        assert_eq!(app.notifications.items().len(), 1);
        assert_eq!(
            app.notifications.items()[0].text,
            UI_TEXT.notify_empty_symbol
        );
    }

    #[test]
    fn symbol_is_trimmed_and_uppercased() {
        let mut app = StockScopeApp::default();
        app.symbol_input = "  aapl ".to_string();
        app.submit_prediction(); // no worker attached, so nothing queues
        assert_eq!(app.symbol_input, "AAPL");
        assert!(!app.in_flight);
    }

    #[test]
    fn backend_error_shows_notification_and_touches_nothing() {
        let mut app = StockScopeApp::default();
        app.in_flight = true;
        app.apply_event(ApiEvent::Prediction {
            symbol: "BAD".into(),
            result: Err(ApiError::Backend("bad symbol".into())),
            duration_ms: 5,
        });
        assert!(!app.in_flight, "spinner must clear on failure");
        assert!(app.snapshot.is_none());
        assert_eq!(app.notifications.items()[0].text, "bad symbol");
    }

    #[test]
    fn shape_error_surfaces_generic_invalid_data() {
        let mut app = StockScopeApp::default();
        let result = PredictionResponse {
            dates: Some(vec!["2024-01-02".into(), "2024-01-03".into()]),
            prices: Some(vec![Some(100.0)]),
            ..Default::default()
        }
        .into_validated();

        app.apply_event(ApiEvent::Prediction {
            symbol: "AAPL".into(),
            result,
            duration_ms: 5,
        });
        assert!(app.snapshot.is_none());
        assert_eq!(
            app.notifications.items()[0].text,
            UI_TEXT.notify_invalid_data
        );
    }

    #[test]
    fn successful_prediction_replaces_snapshot() {
        let mut app = StockScopeApp::default();
        app.in_flight = true;
        app.apply_event(ApiEvent::Prediction {
            symbol: "AAPL".into(),
            result: Ok(valid_prediction()),
            duration_ms: 5,
        });
        assert!(!app.in_flight);
        let snap = app.snapshot.as_ref().unwrap();
        assert_eq!(snap.symbol, "AAPL");
        assert_eq!(snap.charts.prices.len(), 2);

        // Success announces itself as an info toast, not an error
        let toasts = app.notifications.items();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, NotificationKind::Info);
        assert_eq!(toasts[0].text, "AAPL: loaded 2 sessions");
    }

    #[test]
    fn failed_prediction_keeps_previous_snapshot() {
        let mut app = StockScopeApp::default();
        app.apply_event(ApiEvent::Prediction {
            symbol: "AAPL".into(),
            result: Ok(valid_prediction()),
            duration_ms: 5,
        });
        app.apply_event(ApiEvent::Prediction {
            symbol: "NOPE".into(),
            result: Err(ApiError::Backend("no data".into())),
            duration_ms: 5,
        });
        assert_eq!(app.snapshot.as_ref().unwrap().symbol, "AAPL");
    }

    #[test]
    fn quick_stats_failure_is_silent_and_keeps_value() {
        let mut app = StockScopeApp::default();
        app.apply_event(ApiEvent::QuickStats(Ok(crate::api::QuickStats {
            error: None,
            sp500_value: Some(5432.1),
            timestamp: None,
        })));
        assert_eq!(app.quick.sp500_value, Some(5432.1));
        assert!(app.quick.last_updated.is_some());

        app.apply_event(ApiEvent::QuickStats(Err(ApiError::Backend(
            "upstream down".into(),
        ))));
        assert_eq!(app.quick.sp500_value, Some(5432.1));
        assert!(app.notifications.items().is_empty(), "must stay silent");
    }

    #[test]
    fn quick_stats_without_value_keeps_previous() {
        let mut app = StockScopeApp::default();
        app.quick.sp500_value = Some(5000.0);
        app.apply_event(ApiEvent::QuickStats(Ok(crate::api::QuickStats::default())));
        assert_eq!(app.quick.sp500_value, Some(5000.0));
    }
}
