//! Button widget - a clickable push button.

use crate::definition::WidgetDefinition;
use crate::platform::{text_width, Color, Platform, FONT_HEIGHT};
use crate::widgets::{UpdateCtx, WidgetCore};

/// A push button.
///
/// `is_pressed` is an edge: true only on the frame a press edge lands while
/// the pointer hovers the button, false on every other frame including held
/// presses (no repeat). Controllers poll it after the dialog update.
pub struct Button {
    core: WidgetCore,
    is_hover: bool,
    is_pressed: bool,
}

impl Button {
    pub fn from_definition(def: &WidgetDefinition) -> Self {
        Self {
            core: WidgetCore::from_definition(def),
            is_hover: false,
            is_pressed: false,
        }
    }

    pub fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub fn label(&self) -> &str {
        &self.core.text
    }

    pub fn is_hover(&self) -> bool {
        self.is_hover
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn update(&mut self, ctx: &UpdateCtx) {
        let (mx, my) = ctx.mouse();
        self.is_hover = self.core.contains(ctx.origin, mx, my);
        self.is_pressed = self.is_hover && ctx.input.clicked;
    }

    pub fn draw(&self, platform: &mut dyn Platform, origin: (i32, i32)) {
        let b = self.core.bounds(origin);
        let bg = if self.is_pressed {
            Color::DarkBlue
        } else if self.is_hover {
            Color::LightBlue
        } else {
            Color::Gray
        };
        platform.fill_rect(b.x, b.y, b.width, b.height, bg);
        platform.stroke_rect(b.x, b.y, b.width, b.height, Color::Black);

        let tx = b.x + (b.width as i32 - text_width(&self.core.text) as i32) / 2;
        let ty = b.y + (b.height as i32 - FONT_HEIGHT as i32) / 2;
        platform.text(tx, ty, &self.core.text, Color::Black);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{click, hover, idle, settings};

    fn button_at(x: i32, y: i32, w: u32, h: u32) -> Button {
        Button::from_definition(&WidgetDefinition {
            kind: "button".to_string(),
            x,
            y,
            width: w,
            height: h,
            text: "OK".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn press_edge_inside_bounds_sets_pressed() {
        let mut b = button_at(10, 10, 20, 10);
        let s = settings();
        let input = click(25, 15, 0.0);
        b.update(&UpdateCtx { origin: (0, 0), input: &input, settings: &s });
        assert!(b.is_pressed());
        assert!(b.is_hover());
    }

    #[test]
    fn held_button_does_not_repeat() {
        let mut b = button_at(10, 10, 20, 10);
        let s = settings();
        let input = click(25, 15, 0.0);
        b.update(&UpdateCtx { origin: (0, 0), input: &input, settings: &s });
        assert!(b.is_pressed());
        // Next frame the button is still held but the edge is gone.
        let mut held = hover(25, 15, 0.1);
        held.mouse_down = true;
        b.update(&UpdateCtx { origin: (0, 0), input: &held, settings: &s });
        assert!(!b.is_pressed());
    }

    #[test]
    fn press_outside_bounds_is_ignored() {
        let mut b = button_at(10, 10, 20, 10);
        let s = settings();
        let input = click(5, 5, 0.0);
        b.update(&UpdateCtx { origin: (0, 0), input: &input, settings: &s });
        assert!(!b.is_pressed());
        assert!(!b.is_hover());
    }

    #[test]
    fn hit_test_adds_dialog_origin() {
        let mut b = button_at(10, 10, 20, 10);
        let s = settings();
        // Widget coordinates are dialog-relative; screen (25, 15) misses a
        // dialog at (100, 100).
        let input = click(25, 15, 0.0);
        b.update(&UpdateCtx { origin: (100, 100), input: &input, settings: &s });
        assert!(!b.is_pressed());
        let input = click(125, 115, 0.0);
        b.update(&UpdateCtx { origin: (100, 100), input: &input, settings: &s });
        assert!(b.is_pressed());
    }

    #[test]
    fn pressed_clears_on_idle_frame() {
        let mut b = button_at(0, 0, 10, 10);
        let s = settings();
        let input = click(5, 5, 0.0);
        b.update(&UpdateCtx { origin: (0, 0), input: &input, settings: &s });
        assert!(b.is_pressed());
        let input = idle(0.1);
        b.update(&UpdateCtx { origin: (0, 0), input: &input, settings: &s });
        assert!(!b.is_pressed());
    }
}
