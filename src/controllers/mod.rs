//! Controllers that bind shown dialogs to application features.
//!
//! Each controller runs the same frame loop: re-check that its remembered
//! dialog is still the manager's active one, run live validation, poll the
//! OK/Cancel buttons, and on confirm produce a typed result consumed once
//! via `take_result`.

mod compare;
mod data_register;
mod device_id;
mod file_open;
mod file_save;
mod timer_counter;

pub use compare::{CompareDialogController, CompareResult};
pub use data_register::{DataRegisterDialogController, DataRegisterResult};
pub use device_id::{DeviceIdDialogController, DeviceIdResult};
pub use file_open::FileOpenDialogController;
pub use file_save::FileSaveDialogController;
pub use timer_counter::{TimerCounterDialogController, TimerCounterResult};

use std::any::Any;

use crate::dialog::Dialog;
use crate::dialog_manager::{DialogHandle, DialogManager};
use crate::platform::Color;

/// Widget id every edit dialog uses for its validation message line.
pub(crate) const ERROR_LABEL: &str = "IDC_ERROR_MESSAGE";
pub(crate) const OK_BUTTON: &str = "IDOK";
pub(crate) const CANCEL_BUTTON: &str = "IDCANCEL";

/// Frame-driven contract shared by all dialog controllers.
pub trait Controller {
    fn update(&mut self, manager: &mut DialogManager);
    fn is_active(&self, manager: &DialogManager) -> bool;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Registry that drives every registered controller once per frame.
#[derive(Default)]
pub struct ControllerSet {
    controllers: Vec<Box<dyn Controller>>,
}

impl ControllerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a controller, returning its index for later typed access.
    pub fn register(&mut self, controller: Box<dyn Controller>) -> usize {
        self.controllers.push(controller);
        self.controllers.len() - 1
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Run every controller's per-frame update, in registration order.
    pub fn update_all(&mut self, manager: &mut DialogManager) {
        for controller in &mut self.controllers {
            controller.update(manager);
        }
    }

    pub fn has_active(&self, manager: &DialogManager) -> bool {
        self.controllers.iter().any(|c| c.is_active(manager))
    }

    pub fn active_count(&self, manager: &DialogManager) -> usize {
        self.controllers.iter().filter(|c| c.is_active(manager)).count()
    }

    /// Typed access to a registered controller.
    pub fn get<T: Controller + 'static>(&self, index: usize) -> Option<&T> {
        self.controllers.get(index).and_then(|c| c.as_any().downcast_ref())
    }

    pub fn get_mut<T: Controller + 'static>(&mut self, index: usize) -> Option<&mut T> {
        self.controllers
            .get_mut(index)
            .and_then(|c| c.as_any_mut().downcast_mut())
    }
}

/// Binding between a controller and the dialog instance it opened.
///
/// The handle is an identity token; when the manager's active dialog is
/// replaced or closed externally, `sync` silently forgets the binding so the
/// controller never operates on a stale dialog.
pub struct DialogSession {
    dialog_id: String,
    handle: Option<DialogHandle>,
}

impl DialogSession {
    pub fn new(dialog_id: impl Into<String>) -> Self {
        Self {
            dialog_id: dialog_id.into(),
            handle: None,
        }
    }

    pub fn dialog_id(&self) -> &str {
        &self.dialog_id
    }

    /// Show this session's dialog; true when the definition resolved.
    pub fn open(&mut self, manager: &mut DialogManager) -> bool {
        self.handle = manager.show(&self.dialog_id);
        self.handle.is_some()
    }

    /// Drop the binding if the remembered dialog is no longer active.
    pub fn sync(&mut self, manager: &DialogManager) {
        if self.handle.is_some() && self.handle != manager.active_handle() {
            self.handle = None;
        }
    }

    /// True only when the manager has an active dialog and it is ours.
    pub fn is_active(&self, manager: &DialogManager) -> bool {
        self.handle.is_some() && self.handle == manager.active_handle()
    }

    pub fn dialog<'a>(&self, manager: &'a DialogManager) -> Option<&'a Dialog> {
        if self.is_active(manager) {
            manager.active_dialog()
        } else {
            None
        }
    }

    pub fn dialog_mut<'a>(&self, manager: &'a mut DialogManager) -> Option<&'a mut Dialog> {
        if self.is_active(manager) {
            manager.active_dialog_mut()
        } else {
            None
        }
    }

    /// Close the dialog (when still ours) and forget the binding.
    pub fn close(&mut self, manager: &mut DialogManager) {
        if self.is_active(manager) {
            manager.close();
        }
        self.handle = None;
    }
}

pub(crate) fn button_pressed(dialog: &Dialog, id: &str) -> bool {
    dialog
        .find_widget(id)
        .and_then(|w| w.as_button())
        .map(|b| b.is_pressed())
        .unwrap_or(false)
}

pub(crate) fn textbox_text(dialog: &Dialog, id: &str) -> Option<String> {
    dialog
        .find_widget(id)
        .and_then(|w| w.as_textbox())
        .map(|t| t.text().to_string())
}

pub(crate) fn set_textbox_text(dialog: &mut Dialog, id: &str, text: &str) {
    if let Some(tb) = dialog.find_widget_mut(id).and_then(|w| w.as_textbox_mut()) {
        tb.set_text(text);
    }
}

pub(crate) fn set_label(dialog: &mut Dialog, id: &str, text: &str) {
    if let Some(label) = dialog.find_widget_mut(id).and_then(|w| w.as_label_mut()) {
        label.set_text(text);
    }
}

/// Paint the validation message line red.
pub(crate) fn set_error(dialog: &mut Dialog, message: &str) {
    if let Some(label) = dialog.find_widget_mut(ERROR_LABEL).and_then(|w| w.as_label_mut()) {
        label.set_text(message);
        label.set_color(Color::Red);
    }
}

/// Reset the validation message line to empty black text.
pub(crate) fn clear_error(dialog: &mut Dialog) {
    if let Some(label) = dialog.find_widget_mut(ERROR_LABEL).and_then(|w| w.as_label_mut()) {
        label.set_text("");
        label.set_color(Color::Black);
    }
}
