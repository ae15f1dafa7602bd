//! Shared helpers for unit tests.

use crate::input::{InputSnapshot, Key};
use crate::platform::{Color, Platform};
use crate::settings::{ClickMode, Settings};

/// A frame with no input.
pub fn idle(now: f64) -> InputSnapshot {
    InputSnapshot { now, ..Default::default() }
}

/// A frame with the pointer at `(x, y)` and no buttons.
pub fn hover(x: i32, y: i32, now: f64) -> InputSnapshot {
    InputSnapshot { mouse_x: x, mouse_y: y, now, ..Default::default() }
}

/// A frame with a left-button press edge at `(x, y)`.
pub fn click(x: i32, y: i32, now: f64) -> InputSnapshot {
    InputSnapshot {
        mouse_x: x,
        mouse_y: y,
        clicked: true,
        mouse_down: true,
        now,
        ..Default::default()
    }
}

/// A frame with key press edges.
pub fn keys(pressed: &[Key], now: f64) -> InputSnapshot {
    InputSnapshot { pressed: pressed.to_vec(), now, ..Default::default() }
}

/// A frame with key press edges and shift held.
pub fn keys_shifted(pressed: &[Key], now: f64) -> InputSnapshot {
    InputSnapshot { pressed: pressed.to_vec(), shift: true, now, ..Default::default() }
}

/// Default settings: single-click mode.
pub fn settings() -> Settings {
    Settings::default()
}

/// Double-click mode with the default 0.5s interval.
pub fn settings_double() -> Settings {
    let mut s = Settings::default();
    s.set_click_mode(ClickMode::Double);
    s
}

/// Type into a textbox of the active dialog by replacing its text.
pub fn type_text(manager: &mut crate::dialog_manager::DialogManager, widget_id: &str, text: &str) {
    if let Some(tb) = manager
        .active_dialog_mut()
        .and_then(|d| d.find_widget_mut(widget_id))
        .and_then(|w| w.as_textbox_mut())
    {
        tb.set_text(text);
    }
}

/// Deliver a real click frame onto a widget of the active dialog.
pub fn press_button(manager: &mut crate::dialog_manager::DialogManager, widget_id: &str, now: f64) {
    let target = manager.active_dialog().and_then(|dialog| {
        dialog.find_widget(widget_id).map(|w| {
            let b = w.core().bounds(dialog.origin());
            (b.x + b.width as i32 / 2, b.y + b.height as i32 / 2)
        })
    });
    if let Some((x, y)) = target {
        manager.update(&click(x, y, now), &settings());
    }
}

/// Draw call log entry for [`RecordingPlatform`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect(i32, i32, u32, u32, Color),
    StrokeRect(i32, i32, u32, u32, Color),
    Line(i32, i32, i32, i32, Color),
    Triangle(i32, i32, i32, i32, i32, i32, Color),
    Text(i32, i32, String, Color),
}

/// Headless platform that records draw calls and returns inert input.
#[derive(Default)]
pub struct RecordingPlatform {
    pub ops: Vec<DrawOp>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts drawn, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(_, _, s, _) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Platform for RecordingPlatform {
    fn mouse_position(&self) -> (i32, i32) {
        (0, 0)
    }

    fn mouse_pressed(&self) -> bool {
        false
    }

    fn mouse_down(&self) -> bool {
        false
    }

    fn key_pressed(&self, _key: Key) -> bool {
        false
    }

    fn key_down(&self, _key: Key) -> bool {
        false
    }

    fn now(&self) -> f64 {
        0.0
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        self.ops.push(DrawOp::FillRect(x, y, width, height, color));
    }

    fn stroke_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        self.ops.push(DrawOp::StrokeRect(x, y, width, height, color));
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.ops.push(DrawOp::Line(x1, y1, x2, y2, color));
    }

    fn triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color) {
        self.ops.push(DrawOp::Triangle(x1, y1, x2, y2, x3, y3, color));
    }

    fn text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.ops.push(DrawOp::Text(x, y, text.to_string(), color));
    }
}
