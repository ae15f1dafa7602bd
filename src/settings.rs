//! Process-wide interaction settings.
//!
//! Constructed once by the host at startup, mutated only through the explicit
//! setters, and read by value each frame inside widget updates. Widgets must
//! tolerate the click mode changing between frames.

use tracing::{info, warn};

/// Whether a list/file click activates immediately or needs a second click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickMode {
    Single,
    Double,
}

#[derive(Clone, Debug)]
pub struct Settings {
    click_mode: ClickMode,
    double_click_interval: f64,
    pub show_hidden_files: bool,
    pub default_file_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            click_mode: ClickMode::Single,
            double_click_interval: 0.5,
            show_hidden_files: false,
            default_file_filter: "*.*".to_string(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click_mode(&self) -> ClickMode {
        self.click_mode
    }

    pub fn set_click_mode(&mut self, mode: ClickMode) {
        self.click_mode = mode;
        info!(?mode, "click mode changed");
    }

    pub fn toggle_click_mode(&mut self) {
        let next = match self.click_mode {
            ClickMode::Single => ClickMode::Double,
            ClickMode::Double => ClickMode::Single,
        };
        self.set_click_mode(next);
    }

    pub fn is_single_click(&self) -> bool {
        self.click_mode == ClickMode::Single
    }

    pub fn double_click_interval(&self) -> f64 {
        self.double_click_interval
    }

    /// Accepts 0.1..=2.0 seconds; out-of-range values are rejected.
    pub fn set_double_click_interval(&mut self, interval: f64) {
        if (0.1..=2.0).contains(&interval) {
            self.double_click_interval = interval;
        } else {
            warn!(interval, "invalid double click interval");
        }
    }

    /// Short status line for the host's settings display.
    pub fn summary(&self) -> String {
        let mode = match self.click_mode {
            ClickMode::Single => "Single-click",
            ClickMode::Double => "Double-click",
        };
        format!("Mode: {} | Interval: {}s", mode, self.double_click_interval)
    }
}
