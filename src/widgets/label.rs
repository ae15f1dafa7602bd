//! Label widget - static text display.

use crate::definition::WidgetDefinition;
use crate::platform::{text_width, Color, Platform, FONT_HEIGHT};
use crate::theme::resolve_color;
use crate::widgets::WidgetCore;

/// A static text label.
///
/// Controllers repaint labels at runtime (type captions, error messages,
/// previews) via `set_text`/`set_color`.
pub struct Label {
    core: WidgetCore,
    color: Color,
}

impl Label {
    pub fn from_definition(def: &WidgetDefinition) -> Self {
        let mut core = WidgetCore::from_definition(def);
        // Auto-size from the text when the definition leaves extents at zero.
        if core.width == 0 {
            core.width = text_width(&core.text);
        }
        if core.height == 0 {
            core.height = FONT_HEIGHT;
        }
        Self {
            core,
            color: resolve_color(def.color.as_deref(), Color::Black),
        }
    }

    pub fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub fn text(&self) -> &str {
        &self.core.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.core.text = text.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn draw(&self, platform: &mut dyn Platform, origin: (i32, i32)) {
        platform.text(
            origin.0 + self.core.x,
            origin.1 + self.core.y,
            &self.core.text,
            self.color,
        );
    }
}
