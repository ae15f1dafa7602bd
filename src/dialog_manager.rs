//! Instantiates dialogs from declarative definitions and tracks the single
//! active modal dialog.

use std::path::Path;

use tracing::{error, warn};

use crate::definition::{self, DefinitionError, DefinitionSet, WidgetDefinition};
use crate::dialog::Dialog;
use crate::input::InputSnapshot;
use crate::platform::Platform;
use crate::settings::Settings;
use crate::widgets::{Button, Checkbox, Dropdown, Label, ListBox, TextBox, Widget};

/// Identity token for one shown dialog instance.
///
/// Handles are never reused; controllers compare their remembered handle
/// against the manager's current one to detect replacement or closing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogHandle(u64);

/// Owns the immutable definition table and at most one active dialog.
///
/// There is no modal stacking: showing a dialog while one is active silently
/// replaces it, and the previous dialog's widget state is discarded.
pub struct DialogManager {
    definitions: DefinitionSet,
    active: Option<(DialogHandle, Dialog)>,
    next_handle: u64,
}

impl DialogManager {
    pub fn new(definitions: DefinitionSet) -> Self {
        Self {
            definitions,
            active: None,
            next_handle: 0,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        Ok(Self::new(definition::from_json_str(json)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        Ok(Self::new(definition::from_path(path)?))
    }

    /// Manager preloaded with the stock dialog set.
    pub fn with_builtin_dialogs() -> Self {
        Self::new(definition::builtin())
    }

    pub fn has_definition(&self, dialog_id: &str) -> bool {
        self.definitions.contains_key(dialog_id)
    }

    /// Construct and activate the dialog for `dialog_id`.
    ///
    /// A missing definition logs an error and leaves the current active
    /// dialog untouched. Widget definitions with unknown type tags are
    /// skipped with a warning, producing a dialog with fewer widgets than
    /// declared.
    pub fn show(&mut self, dialog_id: &str) -> Option<DialogHandle> {
        let Some(def) = self.definitions.get(dialog_id) else {
            error!(dialog_id, "dialog definition not found");
            return None;
        };
        let widgets = def.widgets.iter().filter_map(build_widget).collect();
        let dialog = Dialog::new(def, widgets);
        let handle = DialogHandle(self.next_handle);
        self.next_handle += 1;
        self.active = Some((handle, dialog));
        Some(handle)
    }

    /// Drop the active dialog, if any.
    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn active_handle(&self) -> Option<DialogHandle> {
        self.active.as_ref().map(|(h, _)| *h)
    }

    pub fn active_dialog(&self) -> Option<&Dialog> {
        self.active.as_ref().map(|(_, d)| d)
    }

    pub fn active_dialog_mut(&mut self) -> Option<&mut Dialog> {
        self.active.as_mut().map(|(_, d)| d)
    }

    pub fn update(&mut self, input: &InputSnapshot, settings: &Settings) {
        if let Some((_, dialog)) = self.active.as_mut() {
            dialog.update(input, settings);
        }
    }

    pub fn draw(&self, platform: &mut dyn Platform) {
        if let Some((_, dialog)) = self.active.as_ref() {
            dialog.draw(platform);
        }
    }
}

/// Type-tag to constructor lookup for widget definitions.
fn build_widget(def: &WidgetDefinition) -> Option<Widget> {
    match def.kind.as_str() {
        "label" => Some(Widget::Label(Label::from_definition(def))),
        "button" => Some(Widget::Button(Button::from_definition(def))),
        "textbox" => Some(Widget::TextBox(TextBox::from_definition(def))),
        "listbox" => Some(Widget::ListBox(ListBox::from_definition(def))),
        "dropdown" => Some(Widget::Dropdown(Dropdown::from_definition(def))),
        "checkbox" => Some(Widget::Checkbox(Checkbox::from_definition(def))),
        kind => {
            warn!(kind, "unsupported widget type");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{click, settings};

    const DEFS: &str = r#"{
        "IDD_A": {
            "x": 10, "y": 10, "width": 100, "height": 60, "title": "A",
            "widgets": [
                { "id": "IDOK", "type": "button", "x": 4, "y": 40, "width": 30, "height": 12, "text": "OK" },
                { "id": "IDC_NAME", "type": "textbox", "x": 4, "y": 20, "width": 60, "height": 12 }
            ]
        },
        "IDD_B": {
            "title": "B",
            "widgets": [
                { "id": "IDC_LIST", "type": "listbox", "x": 4, "y": 16, "width": 60, "height": 34 },
                { "id": "IDC_WEIRD", "type": "slider", "x": 4, "y": 52 },
                { "type": "label", "x": 4, "y": 54, "text": "static" }
            ]
        }
    }"#;

    fn manager() -> DialogManager {
        DialogManager::from_json_str(DEFS).unwrap()
    }

    #[test]
    fn show_builds_widgets_from_the_definition() {
        let mut mgr = manager();
        let handle = mgr.show("IDD_A");
        assert!(handle.is_some());
        let dialog = mgr.active_dialog().unwrap();
        assert_eq!(dialog.title(), "A");
        assert_eq!(dialog.widgets().len(), 2);
        assert!(dialog.find_widget("IDC_NAME").unwrap().as_textbox().is_some());
    }

    #[test]
    fn unknown_dialog_id_leaves_active_unchanged() {
        let mut mgr = manager();
        assert!(mgr.show("IDD_MISSING").is_none());
        assert!(mgr.active_dialog().is_none());

        let shown = mgr.show("IDD_A").unwrap();
        assert!(mgr.show("IDD_MISSING").is_none());
        assert_eq!(mgr.active_handle(), Some(shown));
        assert_eq!(mgr.active_dialog().unwrap().title(), "A");
    }

    #[test]
    fn unknown_widget_types_are_skipped() {
        let mut mgr = manager();
        mgr.show("IDD_B");
        // Three declared, the "slider" dropped.
        assert_eq!(mgr.active_dialog().unwrap().widgets().len(), 2);
        assert!(mgr.active_dialog().unwrap().find_widget("IDC_WEIRD").is_none());
    }

    #[test]
    fn show_replaces_the_active_dialog() {
        let mut mgr = manager();
        let first = mgr.show("IDD_A").unwrap();
        let second = mgr.show("IDD_B").unwrap();
        assert_ne!(first, second);
        assert_eq!(mgr.active_handle(), Some(second));
        assert_eq!(mgr.active_dialog().unwrap().title(), "B");
    }

    #[test]
    fn reshowing_the_same_id_resets_widget_state() {
        let mut mgr = manager();
        mgr.show("IDD_A");
        mgr.active_dialog_mut()
            .unwrap()
            .find_widget_mut("IDC_NAME")
            .unwrap()
            .as_textbox_mut()
            .unwrap()
            .set_text("typed");
        mgr.show("IDD_A");
        let text = mgr
            .active_dialog()
            .unwrap()
            .find_widget("IDC_NAME")
            .unwrap()
            .as_textbox()
            .unwrap()
            .text()
            .to_string();
        assert_eq!(text, "");
    }

    #[test]
    fn close_clears_unconditionally() {
        let mut mgr = manager();
        mgr.close();
        assert!(mgr.active_handle().is_none());
        mgr.show("IDD_A");
        mgr.close();
        assert!(mgr.active_dialog().is_none());
    }

    #[test]
    fn update_reaches_the_active_dialog() {
        let mut mgr = manager();
        mgr.show("IDD_A");
        let s = settings();
        // Button at dialog (10,10) + widget (4,40).
        mgr.update(&click(16, 55, 0.0), &s);
        let pressed = mgr
            .active_dialog()
            .unwrap()
            .find_widget("IDOK")
            .unwrap()
            .as_button()
            .unwrap()
            .is_pressed();
        assert!(pressed);
    }

    #[test]
    fn update_without_active_dialog_is_a_no_op() {
        let mut mgr = manager();
        let s = settings();
        mgr.update(&click(0, 0, 0.0), &s);
        assert!(mgr.active_dialog().is_none());
    }

    #[test]
    fn builtin_dialogs_construct_fully() {
        let mut mgr = DialogManager::with_builtin_dialogs();
        for id in [
            "IDD_DEVICE_ID_EDIT",
            "IDD_TIMER_COUNTER_EDIT",
            "IDD_COMPARE_DEVICE_EDIT",
            "IDD_DATA_REGISTER_EDIT",
            "IDD_FILE_OPEN",
            "IDD_SAVE_AS",
        ] {
            let def_count = {
                mgr.show(id).unwrap();
                mgr.active_dialog().unwrap().widgets().len()
            };
            // Every declared widget type is supported.
            assert!(def_count > 0, "dialog {id} built no widgets");
            assert!(mgr.active_dialog().unwrap().find_widget("IDCANCEL").is_some());
        }
    }
}
