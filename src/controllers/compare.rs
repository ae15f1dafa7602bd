//! Compare-device edit dialog controller.

use std::any::Any;

use crate::controllers::{
    button_pressed, clear_error, set_error, set_label, set_textbox_text, textbox_text, Controller,
    DialogSession, CANCEL_BUTTON, OK_BUTTON,
};
use crate::dialog_manager::DialogManager;

const DIALOG_ID: &str = "IDD_COMPARE_DEVICE_EDIT";
const LEFT_INPUT: &str = "IDC_LEFT_VALUE_INPUT";
const RIGHT_INPUT: &str = "IDC_RIGHT_VALUE_INPUT";
const OPERATOR_DROPDOWN: &str = "IDC_OPERATOR_DROPDOWN";
const PREVIEW_LABEL: &str = "IDC_PREVIEW_TEXT";

const OPERATORS: [&str; 3] = ["=", "<", ">"];

/// Validated comparison triple produced on confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareResult {
    pub left: String,
    pub operator: String,
    pub right: String,
}

/// Edits a compare contact: left device, operator, right device or constant.
pub struct CompareDialogController {
    session: DialogSession,
    result: Option<CompareResult>,
}

impl CompareDialogController {
    pub fn new() -> Self {
        Self {
            session: DialogSession::new(DIALOG_ID),
            result: None,
        }
    }

    pub fn show(&mut self, manager: &mut DialogManager, left: &str, operator: &str, right: &str) {
        self.result = None;
        if !self.session.open(manager) {
            return;
        }
        if let Some(dialog) = self.session.dialog_mut(manager) {
            set_textbox_text(dialog, LEFT_INPUT, left);
            set_textbox_text(dialog, RIGHT_INPUT, right);
            let index = OPERATORS.iter().position(|&op| op == operator).unwrap_or(0);
            if let Some(dd) = dialog.find_widget_mut(OPERATOR_DROPDOWN).and_then(|w| w.as_dropdown_mut()) {
                dd.set_selected_index(index);
            }
            clear_error(dialog);
        }
        self.refresh_preview(manager);
    }

    pub fn take_result(&mut self) -> Option<CompareResult> {
        self.result.take()
    }

    pub fn is_active(&self, manager: &DialogManager) -> bool {
        self.session.is_active(manager)
    }

    pub fn update(&mut self, manager: &mut DialogManager) {
        self.session.sync(manager);
        if !self.session.is_active(manager) {
            return;
        }

        self.refresh_preview(manager);

        let (ok, cancel) = {
            let Some(dialog) = self.session.dialog(manager) else { return };
            (button_pressed(dialog, OK_BUTTON), button_pressed(dialog, CANCEL_BUTTON))
        };
        if ok {
            self.confirm(manager);
        } else if cancel {
            self.cancel(manager);
        }
    }

    fn fields(&self, manager: &DialogManager) -> Option<(String, String, String)> {
        let dialog = self.session.dialog(manager)?;
        let left = textbox_text(dialog, LEFT_INPUT).unwrap_or_default();
        let right = textbox_text(dialog, RIGHT_INPUT).unwrap_or_default();
        let operator = dialog
            .find_widget(OPERATOR_DROPDOWN)
            .and_then(|w| w.as_dropdown())
            .and_then(|dd| dd.selected_value())
            .unwrap_or("=")
            .to_string();
        Some((left, operator, right))
    }

    /// Mirror the current fields into the preview line.
    fn refresh_preview(&mut self, manager: &mut DialogManager) {
        let Some((left, operator, right)) = self.fields(manager) else { return };
        let preview = format!(
            "{} {} {}",
            if left.is_empty() { "D0" } else { &left },
            operator,
            if right.is_empty() { "10" } else { &right },
        );
        if let Some(dialog) = self.session.dialog_mut(manager) {
            set_label(dialog, PREVIEW_LABEL, &preview);
        }
    }

    fn confirm(&mut self, manager: &mut DialogManager) {
        let Some((left, operator, right)) = self.fields(manager) else { return };
        let left = left.trim().to_uppercase();
        let right = right.trim().to_uppercase();

        let outcome = validate_compare(&left, &operator, &right);
        match outcome {
            Ok(()) => {
                self.result = Some(CompareResult { left, operator, right });
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

impl Default for CompareDialogController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for CompareDialogController {
    fn update(&mut self, manager: &mut DialogManager) {
        CompareDialogController::update(self, manager);
    }

    fn is_active(&self, manager: &DialogManager) -> bool {
        CompareDialogController::is_active(self, manager)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn validate_compare(left: &str, operator: &str, right: &str) -> Result<(), String> {
    if !is_device_name(left) {
        return Err("Left value must be a D/T/C device.".to_string());
    }
    if !OPERATORS.contains(&operator) {
        return Err("Operator must be =, < or >.".to_string());
    }
    if !is_right_value(right) {
        return Err("Right value must be an integer or device.".to_string());
    }
    Ok(())
}

/// D0-D7999, T0-T255 or C0-C255.
fn is_device_name(name: &str) -> bool {
    let mut chars = name.chars();
    let (prefix, digits) = match chars.next() {
        Some(p) => (p, chars.as_str()),
        None => return false,
    };
    let Ok(number) = digits.parse::<u32>() else {
        return false;
    };
    match prefix {
        'D' => number <= 7999,
        'T' | 'C' => number <= 255,
        _ => false,
    }
}

/// A 16-bit signed constant, or a device name.
fn is_right_value(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    match value.parse::<i32>() {
        Ok(number) => (-32768..=32767).contains(&number),
        Err(_) => is_device_name(value),
    }
}
