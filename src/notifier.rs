use crate::ui;
use indicatif::ProgressBar;
use request_dispatch::{Notification, Notifier};
use std::sync::Mutex;
use std::time::Duration;

/// Notifier for a terminal: a spinner while loading, a colored line per toast
#[derive(Default)]
pub struct TerminalNotifier {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Notifier for TerminalNotifier {
    fn show_loading(&self, notification: &Notification) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ui::loading_style());
        pb.set_message(notification.label.clone());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            if let Some(previous) = spinner.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn hide_loading(&self) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut s| s.take()) {
            pb.finish_and_clear();
        }
    }

    fn show(&self, notification: &Notification) {
        tracing::debug!(
            icon = ?notification.icon,
            duration_ms = notification.duration_ms,
            "toast"
        );
        ui::toast(notification);
    }
}
