//! Modal dialog container owning an ordered widget list.

use crate::definition::DialogDefinition;
use crate::geom::Rect;
use crate::input::InputSnapshot;
use crate::platform::Platform;
use crate::settings::Settings;
use crate::theme::DialogStyle;
use crate::widgets::{UpdateCtx, Widget};

/// Height of the title bar in pixels.
pub const TITLE_BAR_HEIGHT: u32 = 12;

/// A modal window with an ordered set of owned widgets.
///
/// Widget coordinates are relative to the dialog's top-left corner; the
/// origin is applied at update/draw time. Widgets are never shared across
/// dialogs and are discarded with their dialog.
pub struct Dialog {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    title: String,
    style: DialogStyle,
    widgets: Vec<Widget>,
    active: bool,
}

impl Dialog {
    pub(crate) fn new(def: &DialogDefinition, widgets: Vec<Widget>) -> Self {
        Self {
            x: def.x,
            y: def.y,
            width: def.width,
            height: def.height,
            title: def.title.clone(),
            style: DialogStyle::resolve(&def.style),
            widgets,
            active: true,
        }
    }

    /// Top-left corner in screen space.
    pub fn origin(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn style(&self) -> &DialogStyle {
        &self.style
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut [Widget] {
        &mut self.widgets
    }

    /// Look up a widget by identifier (linear scan, declaration order).
    pub fn find_widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id() == Some(id))
    }

    pub fn find_widget_mut(&mut self, id: &str) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id() == Some(id))
    }

    /// Forward the frame's input to every widget in declaration order.
    pub fn update(&mut self, input: &InputSnapshot, settings: &Settings) {
        if !self.active {
            return;
        }
        let ctx = UpdateCtx { origin: (self.x, self.y), input, settings };
        for widget in &mut self.widgets {
            widget.update(&ctx);
        }
    }

    /// Render chrome and widgets. Dropdowns are drawn after everything else
    /// so their flyouts overlay sibling widgets; all other widgets render in
    /// declaration order.
    pub fn draw(&self, platform: &mut dyn Platform) {
        if !self.active {
            return;
        }
        platform.fill_rect(self.x, self.y, self.width, self.height, self.style.background);
        platform.fill_rect(self.x, self.y, self.width, TITLE_BAR_HEIGHT, self.style.title_bar);
        platform.stroke_rect(self.x, self.y, self.width, self.height, self.style.border);
        platform.text(self.x + 4, self.y + 3, &self.title, self.style.title_text);

        let origin = (self.x, self.y);
        for widget in self.widgets.iter().filter(|w| !w.is_dropdown()) {
            widget.draw(platform, origin);
        }
        for widget in self.widgets.iter().filter(|w| w.is_dropdown()) {
            widget.draw(platform, origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{DialogDefinition, WidgetDefinition};
    use crate::test_support::{click, settings, RecordingPlatform};
    use crate::widgets::{Button, Dropdown, Label};

    fn empty_def() -> DialogDefinition {
        DialogDefinition {
            x: 10,
            y: 20,
            width: 100,
            height: 80,
            title: "Test".to_string(),
            style: Default::default(),
            widgets: Vec::new(),
        }
    }

    fn label(id: &str, text: &str) -> Widget {
        Widget::Label(Label::from_definition(&WidgetDefinition {
            id: Some(id.to_string()),
            kind: "label".to_string(),
            text: text.to_string(),
            ..Default::default()
        }))
    }

    fn button(id: &str, x: i32, y: i32) -> Widget {
        Widget::Button(Button::from_definition(&WidgetDefinition {
            id: Some(id.to_string()),
            kind: "button".to_string(),
            x,
            y,
            width: 20,
            height: 10,
            text: "OK".to_string(),
            ..Default::default()
        }))
    }

    fn dropdown(id: &str) -> Widget {
        Widget::Dropdown(Dropdown::from_definition(&WidgetDefinition {
            id: Some(id.to_string()),
            kind: "dropdown".to_string(),
            x: 4,
            y: 40,
            width: 30,
            height: 10,
            items: vec!["first".to_string(), "second".to_string()],
            ..Default::default()
        }))
    }

    #[test]
    fn find_widget_scans_by_id() {
        let dialog = Dialog::new(&empty_def(), vec![label("a", "A"), button("b", 0, 0)]);
        assert!(dialog.find_widget("a").is_some());
        assert!(dialog.find_widget("b").unwrap().as_button().is_some());
        assert!(dialog.find_widget("missing").is_none());
    }

    #[test]
    fn anonymous_widgets_are_not_found() {
        let anon = Widget::Label(Label::from_definition(&WidgetDefinition {
            kind: "label".to_string(),
            text: "static".to_string(),
            ..Default::default()
        }));
        let dialog = Dialog::new(&empty_def(), vec![anon]);
        assert!(dialog.find_widget("static").is_none());
    }

    #[test]
    fn update_applies_the_dialog_origin() {
        // Dialog at (10, 20); button at (4, 30) within it.
        let mut dialog = Dialog::new(&empty_def(), vec![button("ok", 4, 30)]);
        let s = settings();
        dialog.update(&click(16, 55, 0.0), &s);
        assert!(dialog.find_widget("ok").unwrap().as_button().unwrap().is_pressed());
    }

    #[test]
    fn inactive_dialog_ignores_update() {
        let mut dialog = Dialog::new(&empty_def(), vec![button("ok", 4, 30)]);
        dialog.set_active(false);
        let s = settings();
        dialog.update(&click(16, 55, 0.0), &s);
        assert!(!dialog.find_widget("ok").unwrap().as_button().unwrap().is_pressed());
    }

    #[test]
    fn dropdowns_draw_last_regardless_of_declaration_order() {
        let dialog = Dialog::new(
            &empty_def(),
            vec![dropdown("dd"), label("l", "after the dropdown")],
        );
        let mut platform = RecordingPlatform::new();
        dialog.draw(&mut platform);
        let texts = platform.texts();
        // Title first, then the label, then the dropdown's value.
        assert_eq!(texts, vec!["Test", "after the dropdown", "first"]);
    }

    #[test]
    fn draw_is_idempotent() {
        let dialog = Dialog::new(&empty_def(), vec![label("l", "x"), dropdown("dd")]);
        let mut first = RecordingPlatform::new();
        dialog.draw(&mut first);
        let mut second = RecordingPlatform::new();
        dialog.draw(&mut second);
        dialog.draw(&mut second);
        assert_eq!(second.ops.len(), first.ops.len() * 2);
        assert_eq!(&second.ops[..first.ops.len()], &first.ops[..]);
    }

    #[test]
    fn inactive_dialog_draws_nothing() {
        let mut dialog = Dialog::new(&empty_def(), vec![label("l", "x")]);
        dialog.set_active(false);
        let mut platform = RecordingPlatform::new();
        dialog.draw(&mut platform);
        assert!(platform.ops.is_empty());
    }
}
