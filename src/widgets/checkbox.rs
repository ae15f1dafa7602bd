//! Checkbox widget - a toggle box with a trailing label.

use crate::definition::WidgetDefinition;
use crate::platform::{text_width, Color, Platform, FONT_HEIGHT};
use crate::widgets::{UpdateCtx, WidgetCore};

/// Side of the check square in pixels.
const BOX_SIZE: u32 = 8;
/// Gap between the square and the label text.
const BOX_GAP: u32 = 3;

/// A boolean toggle.
///
/// A press edge anywhere inside the bounds flips the state and fires the
/// checked-changed hook with the new value.
pub struct Checkbox {
    core: WidgetCore,
    checked: bool,
    hover: bool,
    /// State flipped this frame.
    just_toggled: bool,
    on_checked_changed: Option<Box<dyn FnMut(bool)>>,
}

impl Checkbox {
    pub fn from_definition(def: &WidgetDefinition) -> Self {
        let mut core = WidgetCore::from_definition(def);
        // Auto-size from the text when the definition leaves extents at zero.
        if core.width == 0 {
            core.width = BOX_SIZE + BOX_GAP + text_width(&core.text);
        }
        if core.height == 0 {
            core.height = BOX_SIZE.max(FONT_HEIGHT);
        }
        Self {
            core,
            checked: def.checked,
            hover: false,
            just_toggled: false,
            on_checked_changed: None,
        }
    }

    pub fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn is_hover(&self) -> bool {
        self.hover
    }

    /// The state flipped during the last update.
    pub fn just_toggled(&self) -> bool {
        self.just_toggled
    }

    pub fn set_on_checked_changed(&mut self, hook: impl FnMut(bool) + 'static) {
        self.on_checked_changed = Some(Box::new(hook));
    }

    pub fn update(&mut self, ctx: &UpdateCtx) {
        self.just_toggled = false;
        let (mx, my) = ctx.mouse();
        self.hover = self.core.contains(ctx.origin, mx, my);
        if ctx.input.clicked && self.hover {
            self.checked = !self.checked;
            self.just_toggled = true;
            if let Some(hook) = self.on_checked_changed.as_mut() {
                hook(self.checked);
            }
        }
    }

    pub fn draw(&self, platform: &mut dyn Platform, origin: (i32, i32)) {
        let b = self.core.bounds(origin);
        let bx = b.x;
        let by = b.y + (b.height as i32 - BOX_SIZE as i32) / 2;
        platform.fill_rect(bx, by, BOX_SIZE, BOX_SIZE, Color::White);
        let border = if self.hover { Color::Navy } else { Color::Black };
        platform.stroke_rect(bx, by, BOX_SIZE, BOX_SIZE, border);
        if self.checked {
            // X mark across the square.
            platform.line(bx + 1, by + 1, bx + BOX_SIZE as i32 - 2, by + BOX_SIZE as i32 - 2, Color::Black);
            platform.line(bx + BOX_SIZE as i32 - 2, by + 1, bx + 1, by + BOX_SIZE as i32 - 2, Color::Black);
        }

        let tx = bx + (BOX_SIZE + BOX_GAP) as i32;
        let ty = b.y + (b.height as i32 - FONT_HEIGHT as i32) / 2;
        platform.text(tx, ty, &self.core.text, Color::Black);
    }
}
