//! TextBox widget - a single-line text input field.

use crate::definition::WidgetDefinition;
use crate::input::{printable, Key};
use crate::platform::{Color, Platform, FONT_HEIGHT, FONT_WIDTH};
use crate::widgets::{UpdateCtx, WidgetCore};

/// Cursor blink half-period in seconds.
const BLINK_INTERVAL: f64 = 0.5;
/// Applied when the definition gives no `max_length`.
const DEFAULT_MAX_LENGTH: usize = 64;
/// Inset between the border and the first character cell.
const TEXT_PAD: i32 = 2;

/// A single-line text input.
///
/// Focus is gained on a press edge inside the bounds (unless read-only) and
/// lost on a press edge outside. While focused, key edges edit the text at
/// the cursor; the cursor blinks on a fixed interval and any edit snaps it
/// visible.
pub struct TextBox {
    core: WidgetCore,
    focused: bool,
    /// Cursor position in characters, 0..=len.
    cursor: usize,
    cursor_visible: bool,
    /// Wall-clock time of the last blink toggle.
    blink_t: f64,
    max_length: usize,
    read_only: bool,
    /// Text edited this frame.
    changed: bool,
    on_text_changed: Option<Box<dyn FnMut(&str)>>,
}

impl TextBox {
    pub fn from_definition(def: &WidgetDefinition) -> Self {
        let core = WidgetCore::from_definition(def);
        let cursor = core.text.chars().count();
        Self {
            core,
            focused: false,
            cursor,
            cursor_visible: true,
            blink_t: 0.0,
            max_length: def.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
            read_only: def.read_only,
            changed: false,
            on_text_changed: None,
        }
    }

    pub fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub fn text(&self) -> &str {
        &self.core.text
    }

    /// Replace the text, moving the cursor to the end. Does not fire the
    /// text-changed hook; this is the controller writing, not the user.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.core.text = text.into();
        self.cursor = self.char_len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Text was edited during the last update.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn set_on_text_changed(&mut self, hook: impl FnMut(&str) + 'static) {
        self.on_text_changed = Some(Box::new(hook));
    }

    fn char_len(&self) -> usize {
        self.core.text.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.core
            .text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.core.text.len())
    }

    fn force_cursor_visible(&mut self, now: f64) {
        self.cursor_visible = true;
        self.blink_t = now;
    }

    pub fn update(&mut self, ctx: &UpdateCtx) {
        self.changed = false;
        let now = ctx.input.now;
        let (mx, my) = ctx.mouse();

        if ctx.input.clicked {
            if self.core.contains(ctx.origin, mx, my) {
                if !self.read_only {
                    self.focused = true;
                    // Map the click column to a character position.
                    let col = (mx - (ctx.origin.0 + self.core.x + TEXT_PAD)).max(0)
                        / FONT_WIDTH as i32;
                    self.cursor = (col as usize).min(self.char_len());
                    self.force_cursor_visible(now);
                }
            } else {
                self.focused = false;
            }
        }

        if !self.focused || self.read_only {
            return;
        }

        let mut edited = false;
        for &key in &ctx.input.pressed {
            match key {
                Key::Backspace => {
                    if self.cursor > 0 {
                        let at = self.byte_at(self.cursor - 1);
                        self.core.text.remove(at);
                        self.cursor -= 1;
                        edited = true;
                    }
                }
                Key::Delete => {
                    if self.cursor < self.char_len() {
                        let at = self.byte_at(self.cursor);
                        self.core.text.remove(at);
                        edited = true;
                    }
                }
                Key::Left => {
                    self.cursor = self.cursor.saturating_sub(1);
                }
                Key::Right => {
                    self.cursor = (self.cursor + 1).min(self.char_len());
                }
                key => {
                    if let Some(ch) = printable(key, ctx.input.shift) {
                        if self.char_len() < self.max_length {
                            let at = self.byte_at(self.cursor);
                            self.core.text.insert(at, ch);
                            self.cursor += 1;
                            edited = true;
                        }
                    }
                }
            }
        }

        if edited {
            self.changed = true;
            self.force_cursor_visible(now);
            if let Some(hook) = self.on_text_changed.as_mut() {
                hook(&self.core.text);
            }
        } else if now - self.blink_t >= BLINK_INTERVAL {
            self.cursor_visible = !self.cursor_visible;
            self.blink_t = now;
        }
    }

    pub fn draw(&self, platform: &mut dyn Platform, origin: (i32, i32)) {
        let b = self.core.bounds(origin);
        let bg = if self.read_only { Color::Gray } else { Color::White };
        platform.fill_rect(b.x, b.y, b.width, b.height, bg);
        let border = if self.focused && !self.read_only {
            Color::Navy
        } else {
            Color::Black
        };
        platform.stroke_rect(b.x, b.y, b.width, b.height, border);

        let ty = b.y + (b.height as i32 - FONT_HEIGHT as i32) / 2;
        let visible_chars = (b.width.saturating_sub(2 * TEXT_PAD as u32) / FONT_WIDTH) as usize;
        let shown: String = self.core.text.chars().take(visible_chars).collect();
        platform.text(b.x + TEXT_PAD, ty, &shown, Color::Black);

        // Blinking caret; never shown unfocused or read-only.
        if self.focused && !self.read_only && self.cursor_visible {
            let cx = b.x + TEXT_PAD + (self.cursor.min(visible_chars) as i32) * FONT_WIDTH as i32;
            platform.line(cx, ty, cx, ty + FONT_HEIGHT as i32 - 1, Color::Black);
        }
    }
}
