mod app;
mod charts;
mod notifications;
mod panels;
mod ui_text;

pub use app::{QuickView, StockScopeApp, Timeframe};
