//! Spinner shown by one-shot CLI commands while a remote call is in flight.

use crate::output::{GREEN, RED, RESET};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

pub struct Spinner {
    bar: ProgressBar,
    start_time: Instant,
}

impl Spinner {
    pub fn new(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_chars(SPINNER_CHARS)
            .template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self {
            bar,
            start_time: Instant::now(),
        }
    }

    /// Hidden spinner for non-interactive use.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            start_time: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Clear the spinner line without printing a final message.
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }

    pub fn finish_success(&self, message: &str) {
        self.bar.finish_and_clear();
        println!(
            "{GREEN}\u{2714} {} ({} ms){RESET}",
            message,
            self.elapsed_ms()
        );
    }

    pub fn finish_error(&self, message: &str) {
        self.bar.finish_and_clear();
        eprintln!("{RED}\u{2718} {}{RESET}", message);
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_lifecycle() {
        let spinner = Spinner::hidden();
        spinner.finish_success("done");
        assert!(spinner.bar.is_finished());
    }
}
