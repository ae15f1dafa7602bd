//! Widget variants and their shared update/draw contract.
//!
//! Every widget exposes `update` (consumes the frame's input snapshot,
//! mutates interaction state, never draws) and `draw` (renders from current
//! state, never mutates). Widget coordinates are dialog-relative; the owning
//! dialog's origin arrives through [`UpdateCtx`] or the draw call and is
//! never stored denormalized.

mod button;
mod checkbox;
mod dropdown;
mod label;
mod listbox;
mod textbox;

pub use button::Button;
pub use checkbox::Checkbox;
pub use dropdown::Dropdown;
pub use label::Label;
pub use listbox::{ListBox, ListBoxEvent};
pub use textbox::TextBox;

use crate::definition::WidgetDefinition;
use crate::geom::Rect;
use crate::input::InputSnapshot;
use crate::platform::Platform;
use crate::settings::Settings;

/// Per-frame context handed to every widget update.
pub struct UpdateCtx<'a> {
    /// Top-left of the owning dialog in screen space.
    pub origin: (i32, i32),
    pub input: &'a InputSnapshot,
    pub settings: &'a Settings,
}

impl UpdateCtx<'_> {
    pub fn mouse(&self) -> (i32, i32) {
        self.input.mouse()
    }
}

/// Attributes shared by every widget variant.
#[derive(Clone, Debug)]
pub struct WidgetCore {
    /// Identifier for controller lookup; absent for static decorations.
    pub id: Option<String>,
    /// Position relative to the owning dialog.
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub text: String,
}

impl WidgetCore {
    pub fn from_definition(def: &WidgetDefinition) -> Self {
        Self {
            id: def.id.clone(),
            x: def.x,
            y: def.y,
            width: def.width,
            height: def.height,
            text: def.text.clone(),
        }
    }

    /// Bounds in screen space given the owning dialog's origin.
    pub fn bounds(&self, origin: (i32, i32)) -> Rect {
        Rect::new(origin.0 + self.x, origin.1 + self.y, self.width, self.height)
    }

    pub fn contains(&self, origin: (i32, i32), px: i32, py: i32) -> bool {
        self.bounds(origin).contains(px, py)
    }
}

/// Tagged union over the six widget kinds.
pub enum Widget {
    Label(Label),
    Button(Button),
    TextBox(TextBox),
    ListBox(ListBox),
    Dropdown(Dropdown),
    Checkbox(Checkbox),
}

impl Widget {
    pub fn core(&self) -> &WidgetCore {
        match self {
            Widget::Label(w) => w.core(),
            Widget::Button(w) => w.core(),
            Widget::TextBox(w) => w.core(),
            Widget::ListBox(w) => w.core(),
            Widget::Dropdown(w) => w.core(),
            Widget::Checkbox(w) => w.core(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.core().id.as_deref()
    }

    /// Dropdowns are drawn after all siblings so their flyouts overlay them.
    pub fn is_dropdown(&self) -> bool {
        matches!(self, Widget::Dropdown(_))
    }

    pub fn update(&mut self, ctx: &UpdateCtx) {
        match self {
            Widget::Label(_) => {}
            Widget::Button(w) => w.update(ctx),
            Widget::TextBox(w) => w.update(ctx),
            Widget::ListBox(w) => w.update(ctx),
            Widget::Dropdown(w) => w.update(ctx),
            Widget::Checkbox(w) => w.update(ctx),
        }
    }

    pub fn draw(&self, platform: &mut dyn Platform, origin: (i32, i32)) {
        match self {
            Widget::Label(w) => w.draw(platform, origin),
            Widget::Button(w) => w.draw(platform, origin),
            Widget::TextBox(w) => w.draw(platform, origin),
            Widget::ListBox(w) => w.draw(platform, origin),
            Widget::Dropdown(w) => w.draw(platform, origin),
            Widget::Checkbox(w) => w.draw(platform, origin),
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Widget::Label(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match self {
            Widget::Label(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Widget::Button(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            Widget::Button(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_textbox(&self) -> Option<&TextBox> {
        match self {
            Widget::TextBox(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_textbox_mut(&mut self) -> Option<&mut TextBox> {
        match self {
            Widget::TextBox(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_listbox(&self) -> Option<&ListBox> {
        match self {
            Widget::ListBox(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_listbox_mut(&mut self) -> Option<&mut ListBox> {
        match self {
            Widget::ListBox(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_dropdown(&self) -> Option<&Dropdown> {
        match self {
            Widget::Dropdown(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_dropdown_mut(&mut self) -> Option<&mut Dropdown> {
        match self {
            Widget::Dropdown(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_checkbox(&self) -> Option<&Checkbox> {
        match self {
            Widget::Checkbox(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_checkbox_mut(&mut self) -> Option<&mut Checkbox> {
        match self {
            Widget::Checkbox(w) => Some(w),
            _ => None,
        }
    }
}
