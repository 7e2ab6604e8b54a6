//! Spinners shown on stderr while probes run.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICKS: &[&str] = &["◐", "◓", "◑", "◒", "●"];

/// A running spinner labelled `msg`, or a hidden bar when `show` is false so
/// callers can finish it unconditionally.
#[must_use]
pub fn spinner_if(show: bool, msg: &str) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner().with_message(msg.to_string());
    // A template error only loses the custom look; keep the default spinner.
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.magenta} {msg}") {
        pb.set_style(style.tick_strings(TICKS));
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
