//! ListBox widget - a scrollable item list with click/double-click selection.

use crate::definition::WidgetDefinition;
use crate::geom::Rect;
use crate::platform::{Color, Platform, FONT_HEIGHT, FONT_WIDTH};
use crate::settings::{ClickMode, Settings};
use crate::widgets::{UpdateCtx, WidgetCore};

/// Applied when the definition gives no `item_height`.
pub const DEFAULT_ITEM_HEIGHT: u32 = 10;
/// Inner inset subtracted from the height before dividing into rows.
const LIST_PADDING: u32 = 4;
/// Top inset of the first row.
const ROW_TOP: i32 = (LIST_PADDING / 2) as i32;
/// Width of the scroll-button strip on the right edge.
const STRIP_WIDTH: u32 = 10;
/// Height of one scroll-button slot.
const STRIP_BUTTON_HEIGHT: u32 = 10;
/// Scroll deltas of the four fixed slots, top to bottom.
const STRIP_DELTAS: [i64; 4] = [-5, -1, 1, 5];

/// Classification of the click that landed on an item row this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListBoxEvent {
    Selected(usize),
    Activated(usize),
}

/// A scrollable list of display strings.
///
/// When more items exist than fit, four scroll buttons occupy fixed slots in
/// a strip on the right edge (up 5, up 1, down 1, down 5). Clicks on item
/// rows classify as selection or activation depending on the click mode and
/// the double-click interval.
pub struct ListBox {
    core: WidgetCore,
    items: Vec<String>,
    selected: Option<usize>,
    scroll_offset: usize,
    hover: Option<usize>,
    /// Time and index of the previous row click, for double-click detection.
    last_click: Option<(f64, usize)>,
    item_height: u32,
    /// Classification of this frame's click, if any.
    event: Option<ListBoxEvent>,
    on_selection_changed: Option<Box<dyn FnMut(usize)>>,
    on_item_activated: Option<Box<dyn FnMut(usize)>>,
}

impl ListBox {
    pub fn from_definition(def: &WidgetDefinition) -> Self {
        Self {
            core: WidgetCore::from_definition(def),
            items: def.items.clone(),
            selected: None,
            scroll_offset: 0,
            hover: None,
            last_click: None,
            item_height: def.item_height.unwrap_or(DEFAULT_ITEM_HEIGHT).max(1),
            event: None,
            on_selection_changed: None,
            on_item_activated: None,
        }
    }

    pub fn core(&self) -> &WidgetCore {
        &self.core
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Replace the items, resetting selection, scroll and click state.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected = None;
        self.scroll_offset = 0;
        self.hover = None;
        self.last_click = None;
        self.event = None;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Out-of-range indices clear the selection.
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.items.len());
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn item_height(&self) -> u32 {
        self.item_height
    }

    /// Rows that fit in the widget.
    pub fn visible_items(&self) -> usize {
        (self.core.height.saturating_sub(LIST_PADDING) / self.item_height) as usize
    }

    pub fn max_scroll(&self) -> usize {
        self.items.len().saturating_sub(self.visible_items())
    }

    fn scrollable(&self) -> bool {
        self.items.len() > self.visible_items()
    }

    /// Scroll by `delta` rows, clamped to `[0, items - visible]`.
    pub fn scroll_by(&mut self, delta: i64) {
        let target = self.scroll_offset as i64 + delta;
        self.scroll_offset = target.clamp(0, self.max_scroll() as i64) as usize;
    }

    /// This frame's click classification.
    pub fn event(&self) -> Option<ListBoxEvent> {
        self.event
    }

    pub fn set_on_selection_changed(&mut self, hook: impl FnMut(usize) + 'static) {
        self.on_selection_changed = Some(Box::new(hook));
    }

    pub fn set_on_item_activated(&mut self, hook: impl FnMut(usize) + 'static) {
        self.on_item_activated = Some(Box::new(hook));
    }

    /// Item index under `(px, py)`, excluding the scroll strip.
    fn row_at(&self, bounds: Rect, px: i32, py: i32) -> Option<usize> {
        let rows_width = if self.scrollable() {
            bounds.width.saturating_sub(STRIP_WIDTH)
        } else {
            bounds.width
        };
        let rows = Rect::new(
            bounds.x,
            bounds.y + ROW_TOP,
            rows_width,
            self.visible_items() as u32 * self.item_height,
        );
        if !rows.contains(px, py) {
            return None;
        }
        let row = ((py - rows.y) / self.item_height as i32) as usize;
        let index = row + self.scroll_offset;
        (index < self.items.len()).then_some(index)
    }

    /// Scroll delta of the strip button under `(px, py)`, if any.
    fn strip_delta_at(&self, bounds: Rect, px: i32, py: i32) -> Option<i64> {
        let strip = Rect::new(
            bounds.right() - STRIP_WIDTH as i32,
            bounds.y,
            STRIP_WIDTH,
            STRIP_BUTTON_HEIGHT * STRIP_DELTAS.len() as u32,
        );
        if !strip.contains(px, py) {
            return None;
        }
        let slot = ((py - strip.y) / STRIP_BUTTON_HEIGHT as i32) as usize;
        STRIP_DELTAS.get(slot).copied()
    }

    fn select(&mut self, index: usize) {
        let changed = self.selected != Some(index);
        self.selected = Some(index);
        self.event = Some(ListBoxEvent::Selected(index));
        if changed {
            if let Some(hook) = self.on_selection_changed.as_mut() {
                hook(index);
            }
        }
    }

    fn activate(&mut self, index: usize) {
        self.event = Some(ListBoxEvent::Activated(index));
        if let Some(hook) = self.on_item_activated.as_mut() {
            hook(index);
        }
    }

    fn click_row(&mut self, index: usize, now: f64, settings: &Settings) {
        match settings.click_mode() {
            ClickMode::Single => {
                // Selection-changed first (if it changed), activation always.
                self.select(index);
                self.activate(index);
                self.last_click = None;
            }
            ClickMode::Double => {
                let is_double = matches!(
                    self.last_click,
                    Some((t, i)) if i == index && now - t <= settings.double_click_interval()
                );
                if is_double {
                    self.activate(index);
                    self.last_click = None;
                } else {
                    self.select(index);
                    self.last_click = Some((now, index));
                }
            }
        }
    }

    pub fn update(&mut self, ctx: &UpdateCtx) {
        self.event = None;
        let (mx, my) = ctx.mouse();
        let bounds = self.core.bounds(ctx.origin);
        self.hover = self.row_at(bounds, mx, my);

        if !ctx.input.clicked {
            return;
        }
        // Empty lists ignore every selection/activation attempt.
        if self.items.is_empty() {
            return;
        }
        if self.scrollable() {
            if let Some(delta) = self.strip_delta_at(bounds, mx, my) {
                self.scroll_by(delta);
                return;
            }
        }
        if let Some(index) = self.row_at(bounds, mx, my) {
            self.click_row(index, ctx.input.now, ctx.settings);
        }
    }

    pub fn draw(&self, platform: &mut dyn Platform, origin: (i32, i32)) {
        let b = self.core.bounds(origin);
        platform.fill_rect(b.x, b.y, b.width, b.height, Color::White);
        platform.stroke_rect(b.x, b.y, b.width, b.height, Color::Black);

        if self.items.is_empty() {
            platform.text(b.x + 4, b.y + ROW_TOP, "(no items)", Color::Gray);
            return;
        }

        let rows_width = if self.scrollable() {
            b.width.saturating_sub(STRIP_WIDTH)
        } else {
            b.width
        };
        for row in 0..self.visible_items() {
            let index = row + self.scroll_offset;
            let Some(item) = self.items.get(index) else { break };
            let ry = b.y + ROW_TOP + (row as u32 * self.item_height) as i32;
            let text_color = if self.selected == Some(index) {
                platform.fill_rect(b.x + 1, ry, rows_width.saturating_sub(2), self.item_height, Color::Navy);
                Color::White
            } else if self.hover == Some(index) {
                platform.fill_rect(b.x + 1, ry, rows_width.saturating_sub(2), self.item_height, Color::LightBlue);
                Color::Black
            } else {
                Color::Black
            };
            let ty = ry + (self.item_height as i32 - FONT_HEIGHT as i32) / 2;
            let visible_chars = (rows_width.saturating_sub(6) / FONT_WIDTH) as usize;
            let shown: String = item.chars().take(visible_chars).collect();
            platform.text(b.x + 3, ty, &shown, text_color);
        }

        if self.scrollable() {
            self.draw_strip(platform, b);
        }
    }

    fn draw_strip(&self, platform: &mut dyn Platform, bounds: Rect) {
        let sx = bounds.right() - STRIP_WIDTH as i32;
        platform.fill_rect(sx, bounds.y, STRIP_WIDTH, bounds.height, Color::Gray);
        for (slot, &delta) in STRIP_DELTAS.iter().enumerate() {
            let sy = bounds.y + (slot as u32 * STRIP_BUTTON_HEIGHT) as i32;
            platform.stroke_rect(sx, sy, STRIP_WIDTH, STRIP_BUTTON_HEIGHT, Color::Black);
            let cx = sx + STRIP_WIDTH as i32 / 2;
            let up = delta < 0;
            let arrows = if delta.unsigned_abs() > 1 { 2 } else { 1 };
            for a in 0..arrows {
                let ay = sy + 2 + (a * 4) as i32;
                if up {
                    platform.triangle(cx, ay, cx - 2, ay + 2, cx + 2, ay + 2, Color::Black);
                } else {
                    platform.triangle(cx - 2, ay, cx + 2, ay, cx, ay + 2, Color::Black);
                }
            }
        }
    }
}
