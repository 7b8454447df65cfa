//! Spinner shown while waiting for the first advisory fragment

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A stderr spinner that disappears once text starts arriving
pub struct WaitingSpinner {
    bar: ProgressBar,
}

impl WaitingSpinner {
    /// Start spinning on stderr with `message`
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_prefix("Advisor".cyan().bold().to_string());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// A spinner that never draws (quiet output, tests)
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Remove the spinner line
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
