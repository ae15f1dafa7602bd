//! Device-ID edit dialog controller.

use std::any::Any;

use crate::controllers::{
    button_pressed, clear_error, set_error, set_label, set_textbox_text, textbox_text, Controller,
    DialogSession, CANCEL_BUTTON, OK_BUTTON,
};
use crate::device::{validate_address, DeviceType};
use crate::dialog_manager::DialogManager;

const DIALOG_ID: &str = "IDD_DEVICE_ID_EDIT";
const TYPE_LABEL: &str = "IDC_LABEL_TYPE";
const ID_INPUT: &str = "IDC_ID_INPUT";

/// Validated device address produced on confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceIdResult {
    pub address: String,
}

/// Edits the address of a ladder element, validating against the PLC
/// addressing rules for its device type.
pub struct DeviceIdDialogController {
    session: DialogSession,
    result: Option<DeviceIdResult>,
    device_type: Option<DeviceType>,
    last_input: String,
}

impl DeviceIdDialogController {
    pub fn new() -> Self {
        Self {
            session: DialogSession::new(DIALOG_ID),
            result: None,
            device_type: None,
            last_input: String::new(),
        }
    }

    /// Open the dialog for `device_type` with an initial address.
    pub fn show(&mut self, manager: &mut DialogManager, device_type: DeviceType, initial: &str) {
        self.result = None;
        self.device_type = Some(device_type);
        self.last_input = initial.to_string();
        if !self.session.open(manager) {
            return;
        }
        if let Some(dialog) = self.session.dialog_mut(manager) {
            dialog.set_title(format!("Edit {} ID", device_type.label()));
            set_label(dialog, TYPE_LABEL, &format!("Type: {}", device_type.label()));
            set_textbox_text(dialog, ID_INPUT, initial);
            clear_error(dialog);
        }
    }

    /// The last confirmed address, consumed on read.
    pub fn take_result(&mut self) -> Option<DeviceIdResult> {
        self.result.take()
    }

    pub fn is_active(&self, manager: &DialogManager) -> bool {
        self.session.is_active(manager)
    }

    pub fn update(&mut self, manager: &mut DialogManager) {
        self.session.sync(manager);
        let Some(device_type) = self.device_type else { return };

        let (ok, cancel) = {
            let Some(dialog) = self.session.dialog_mut(manager) else { return };
            // Live validation whenever the input changes.
            let text = textbox_text(dialog, ID_INPUT).unwrap_or_default();
            if text != self.last_input {
                self.last_input = text.clone();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    clear_error(dialog);
                } else {
                    match validate_address(device_type, trimmed) {
                        Ok(()) => clear_error(dialog),
                        Err(message) => set_error(dialog, &message),
                    }
                }
            }
            (button_pressed(dialog, OK_BUTTON), button_pressed(dialog, CANCEL_BUTTON))
        };

        if ok {
            self.confirm(manager, device_type);
        } else if cancel {
            self.cancel(manager);
        }
    }

    fn confirm(&mut self, manager: &mut DialogManager, device_type: DeviceType) {
        let Some(dialog) = self.session.dialog(manager) else { return };
        let address = textbox_text(dialog, ID_INPUT)
            .unwrap_or_default()
            .trim()
            .to_uppercase();
        match validate_address(device_type, &address) {
            Ok(()) => {
                self.result = Some(DeviceIdResult { address });
                self.session.close(manager);
            }
            Err(message) => {
                if let Some(dialog) = self.session.dialog_mut(manager) {
                    set_error(dialog, &message);
                }
                self.result = None;
            }
        }
    }

    fn cancel(&mut self, manager: &mut DialogManager) {
        self.result = None;
        self.session.close(manager);
    }
}

impl Default for DeviceIdDialogController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for DeviceIdDialogController {
    fn update(&mut self, manager: &mut DialogManager) {
        DeviceIdDialogController::update(self, manager);
    }

    fn is_active(&self, manager: &DialogManager) -> bool {
        DeviceIdDialogController::is_active(self, manager)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Color;
    use crate::test_support::{press_button, type_text};

    fn setup() -> (DialogManager, DeviceIdDialogController) {
        let mut manager = DialogManager::with_builtin_dialogs();
        let mut controller = DeviceIdDialogController::new();
        controller.show(&mut manager, DeviceType::ContactA, "X0");
        (manager, controller)
    }

    #[test]
    fn show_seeds_title_type_and_initial_value() {
        let (manager, controller) = setup();
        assert!(controller.is_active(&manager));
        let dialog = manager.active_dialog().unwrap();
        assert_eq!(dialog.title(), "Edit CONTACT_A ID");
        assert_eq!(
            dialog.find_widget(TYPE_LABEL).unwrap().as_label().unwrap().text(),
            "Type: CONTACT_A"
        );
        assert_eq!(textbox_text(dialog, ID_INPUT).unwrap(), "X0");
    }

    #[test]
    fn confirm_with_valid_address_yields_result_and_closes() {
        let (mut manager, mut controller) = setup();
        type_text(&mut manager, ID_INPUT, "M100");
        press_button(&mut manager, OK_BUTTON, 0.0);
        controller.update(&mut manager);

        assert_eq!(
            controller.take_result(),
            Some(DeviceIdResult { address: "M100".to_string() })
        );
        // Consumed exactly once.
        assert_eq!(controller.take_result(), None);
        assert!(!controller.is_active(&manager));
        assert!(manager.active_dialog().is_none());
    }

    #[test]
    fn confirm_normalizes_case_and_whitespace() {
        let (mut manager, mut controller) = setup();
        type_text(&mut manager, ID_INPUT, "  m100 ");
        press_button(&mut manager, OK_BUTTON, 0.0);
        controller.update(&mut manager);
        assert_eq!(controller.take_result().unwrap().address, "M100");
    }

    #[test]
    fn invalid_address_keeps_dialog_open_with_error() {
        let (mut manager, mut controller) = setup();
        type_text(&mut manager, ID_INPUT, "D5");
        press_button(&mut manager, OK_BUTTON, 0.0);
        controller.update(&mut manager);

        assert_eq!(controller.take_result(), None);
        assert!(controller.is_active(&manager));
        let dialog = manager.active_dialog().unwrap();
        let error = dialog.find_widget("IDC_ERROR_MESSAGE").unwrap().as_label().unwrap();
        assert!(!error.text().is_empty());
        assert_eq!(error.color(), Color::Red);
    }

    #[test]
    fn live_validation_paints_and_clears_the_error_line() {
        let (mut manager, mut controller) = setup();
        type_text(&mut manager, ID_INPUT, "Q9");
        controller.update(&mut manager);
        {
            let dialog = manager.active_dialog().unwrap();
            let error = dialog.find_widget("IDC_ERROR_MESSAGE").unwrap().as_label().unwrap();
            assert!(!error.text().is_empty());
        }
        type_text(&mut manager, ID_INPUT, "X7");
        controller.update(&mut manager);
        let dialog = manager.active_dialog().unwrap();
        let error = dialog.find_widget("IDC_ERROR_MESSAGE").unwrap().as_label().unwrap();
        assert_eq!(error.text(), "");
        assert_eq!(error.color(), Color::Black);
    }

    #[test]
    fn cancel_discards_any_result() {
        let (mut manager, mut controller) = setup();
        press_button(&mut manager, CANCEL_BUTTON, 0.0);
        controller.update(&mut manager);
        assert_eq!(controller.take_result(), None);
        assert!(manager.active_dialog().is_none());
        assert!(!controller.is_active(&manager));
    }

    #[test]
    fn stale_dialog_deactivates_without_error() {
        let (mut manager, mut controller) = setup();
        // Something else replaces the dialog.
        manager.show("IDD_SAVE_AS");
        controller.update(&mut manager);
        assert!(!controller.is_active(&manager));
        // And the replacement dialog is untouched.
        assert_eq!(manager.active_dialog().unwrap().title(), "Save As");
    }

    #[test]
    fn reshow_resets_result_and_validation_state() {
        let (mut manager, mut controller) = setup();
        type_text(&mut manager, ID_INPUT, "M100");
        press_button(&mut manager, OK_BUTTON, 0.0);
        controller.update(&mut manager);
        assert!(controller.take_result().is_some());

        controller.show(&mut manager, DeviceType::TimerTon, "T3");
        assert_eq!(controller.take_result(), None);
        let dialog = manager.active_dialog().unwrap();
        assert_eq!(dialog.title(), "Edit TIMER_TON ID");
        assert_eq!(textbox_text(dialog, ID_INPUT).unwrap(), "T3");
    }
}
