// Terminal feedback while a request is in flight. The spinner draws to
// stderr so the report on stdout stays clean when piped, and indicatif
// hides it entirely when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::time::Duration;

/// Start a spinner showing `msg`. Call `finish_and_clear` before printing
/// the line that reports the outcome.
pub fn spinner(msg: impl Into<Cow<'static, str>>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
