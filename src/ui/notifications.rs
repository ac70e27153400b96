//! Transient toast notifications, rendered as a foreground overlay.

use std::time::Duration;

use eframe::egui::{Align2, Area, Context, Frame, Id, Order, RichText};

use crate::config::constants::NOTIFICATION_TTL_MS;
use crate::config::plot::PLOT_CONFIG;
use crate::utils::time_utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    created_ms: i64,
}

#[derive(Default)]
pub struct NotificationState {
    items: Vec<Notification>,
}

impl NotificationState {
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) {
        self.items.push(Notification {
            text: text.into(),
            kind,
            created_ms: time_utils::local_now_as_timestamp_ms(),
        });
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(NotificationKind::Error, text);
    }

    pub fn push_info(&mut self, text: impl Into<String>) {
        self.push(NotificationKind::Info, text);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn prune(&mut self, now_ms: i64) {
        self.items
            .retain(|n| now_ms - n.created_ms < NOTIFICATION_TTL_MS);
    }

    pub fn render(&mut self, ctx: &Context) {
        self.prune(time_utils::local_now_as_timestamp_ms());
        if self.items.is_empty() {
            return;
        }

        Area::new(Id::new("notification_toasts"))
            .anchor(Align2::RIGHT_TOP, [-16.0, 16.0])
            .order(Order::Foreground)
            .show(ctx, |ui| {
                for n in &self.items {
                    let color = match n.kind {
                        NotificationKind::Error => PLOT_CONFIG.color_loss,
                        NotificationKind::Info => PLOT_CONFIG.color_info,
                    };
                    Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(RichText::new(&n.text).color(color).strong());
                    });
                    ui.add_space(4.0);
                }
            });

        // Keep repainting so toasts expire without user input
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
