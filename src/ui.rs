use colored::{ColoredString, Colorize};
use indicatif::ProgressStyle;
use request_dispatch::Notification;

/// How a status line should read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Done,
    Note,
    Caution,
}

impl Tone {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Done => text.green(),
            Self::Note => text.blue(),
            Self::Caution => text.yellow(),
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Self::Done => "✔",
            Self::Note => "•",
            Self::Caution => "!",
        }
    }
}

/// One status line on stdout
pub fn status(tone: Tone, message: &str) {
    println!("{} {}", tone.paint(tone.marker()), tone.paint(message));
}

/// Heading above a block of response output
pub fn heading(title: &str) {
    println!("\n{}", format!("── {title} ──").cyan().bold());
}

/// Plain-text rendering of a toast: error toasts are tagged and show how long
/// the host would keep them on screen
pub fn toast_text(notification: &Notification) -> String {
    if notification.icon.is_some() {
        format!(
            "[error] {} ({:.1}s)",
            notification.label,
            notification.duration_ms as f64 / 1000.0
        )
    } else {
        notification.label.clone()
    }
}

/// Print a toast to stderr so it never mixes with response data on stdout
pub fn toast(notification: &Notification) {
    let text = toast_text(notification);
    if notification.icon.is_some() {
        eprintln!("{}", text.red().bold());
    } else {
        eprintln!("{}", text.blue());
    }
}

/// Spinner style for the loading indicator
pub fn loading_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
