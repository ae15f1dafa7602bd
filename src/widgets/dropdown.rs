//! Dropdown widget - a button that opens a flyout item list.

use crate::definition::WidgetDefinition;
use crate::geom::Rect;
use crate::platform::{Color, Platform, FONT_HEIGHT, FONT_WIDTH};
use crate::widgets::{UpdateCtx, WidgetCore};

/// Applied when the definition gives no `item_height`.
const DEFAULT_ITEM_HEIGHT: u32 = 10;
/// Applied when the definition gives no `max_visible_items`.
const DEFAULT_MAX_VISIBLE: usize = 5;

/// A closed-by-default selection button with a flyout list.
///
/// A press edge on the button toggles the flyout; while open, a press inside
/// the flyout commits the hovered row and closes, a press anywhere else just
/// closes. The flyout is drawn after sibling widgets so it overlays them.
pub struct Dropdown {
    core: WidgetCore,
    items: Vec<String>,
    selected: Option<usize>,
    open: bool,
    hover_button: bool,
    /// Flyout row under the pointer; valid only while open.
    hover_item: Option<usize>,
    item_height: u32,
    max_visible: usize,
    /// Index committed this frame, if any.
    committed: Option<usize>,
    on_selection_changed: Option<Box<dyn FnMut(usize, &str)>>,
}

impl Dropdown {
    pub fn from_definition(def: &WidgetDefinition) -> Self {
        let items = def.items.clone();
        Self {
            core: WidgetCore::from_definition(def),
            selected: if items.is_empty() { None } else { Some(0) },
            items,
            open: false,
            hover_button: false,
            hover_item: None,
            item_height: def.item_height.unwrap_or(DEFAULT_ITEM_HEIGHT).max(1),
            max_visible: def.max_visible_items.unwrap_or(DEFAULT_MAX_VISIBLE).max(1),
            committed: None,
            on_selection_changed: None,
        }
    }

    pub fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn hover_item(&self) -> Option<usize> {
        self.hover_item
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Out-of-range indices are ignored.
    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected.and_then(|i| self.item(i))
    }

    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Index committed by a flyout click this frame.
    pub fn committed(&self) -> Option<usize> {
        self.committed
    }

    pub fn set_on_selection_changed(&mut self, hook: impl FnMut(usize, &str) + 'static) {
        self.on_selection_changed = Some(Box::new(hook));
    }

    /// Rows shown in the flyout; no flyout scrolling.
    fn shown(&self) -> usize {
        self.items.len().min(self.max_visible)
    }

    fn flyout_bounds(&self, origin: (i32, i32)) -> Rect {
        Rect::new(
            origin.0 + self.core.x,
            origin.1 + self.core.y + self.core.height as i32,
            self.core.width,
            self.shown() as u32 * self.item_height,
        )
    }

    fn flyout_row_at(&self, origin: (i32, i32), px: i32, py: i32) -> Option<usize> {
        let fb = self.flyout_bounds(origin);
        if !fb.contains(px, py) {
            return None;
        }
        let row = ((py - fb.y) / self.item_height as i32) as usize;
        (row < self.shown()).then_some(row)
    }

    fn commit(&mut self, index: usize) {
        self.selected = Some(index);
        self.committed = Some(index);
        if let Some(hook) = self.on_selection_changed.as_mut() {
            if let Some(value) = self.items.get(index) {
                hook(index, value);
            }
        }
    }

    pub fn update(&mut self, ctx: &UpdateCtx) {
        self.committed = None;
        let (mx, my) = ctx.mouse();
        self.hover_button = self.core.contains(ctx.origin, mx, my);

        if self.open {
            self.hover_item = self.flyout_row_at(ctx.origin, mx, my);
            if ctx.input.clicked {
                if let Some(index) = self.hover_item {
                    self.commit(index);
                }
                // Any press while open closes, committed or not.
                self.open = false;
                self.hover_item = None;
            }
        } else {
            self.hover_item = None;
            // An empty dropdown never opens.
            if ctx.input.clicked && self.hover_button && !self.items.is_empty() {
                self.open = true;
            }
        }
    }

    pub fn draw(&self, platform: &mut dyn Platform, origin: (i32, i32)) {
        let b = self.core.bounds(origin);
        let bg = if self.hover_button { Color::LightBlue } else { Color::White };
        platform.fill_rect(b.x, b.y, b.width, b.height, bg);
        platform.stroke_rect(b.x, b.y, b.width, b.height, Color::Black);

        let ty = b.y + (b.height as i32 - FONT_HEIGHT as i32) / 2;
        let value = self.selected_value().unwrap_or("(no items)");
        platform.text(b.x + 2, ty, value, Color::Black);

        // Down arrow at the right edge of the button.
        let ax = b.right() - 6;
        let ay = b.y + b.height as i32 / 2 - 1;
        platform.triangle(ax - 2, ay, ax + 2, ay, ax, ay + 2, Color::Black);

        if self.open {
            let fb = self.flyout_bounds(origin);
            platform.fill_rect(fb.x, fb.y, fb.width, fb.height, Color::White);
            platform.stroke_rect(fb.x, fb.y, fb.width, fb.height, Color::Black);
            for row in 0..self.shown() {
                let Some(item) = self.items.get(row) else { break };
                let ry = fb.y + (row as u32 * self.item_height) as i32;
                let color = if self.hover_item == Some(row) {
                    platform.fill_rect(fb.x + 1, ry, fb.width.saturating_sub(2), self.item_height, Color::Navy);
                    Color::White
                } else {
                    Color::Black
                };
                let ty = ry + (self.item_height as i32 - FONT_HEIGHT as i32) / 2;
                let visible_chars = (fb.width.saturating_sub(4) / FONT_WIDTH) as usize;
                let shown: String = item.chars().take(visible_chars).collect();
                platform.text(fb.x + 2, ty, &shown, color);
            }
        }
    }
}
