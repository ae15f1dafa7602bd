//! Data-register operation edit dialog controller.

use std::any::Any;

use crate::controllers::{
    button_pressed, clear_error, set_error, set_textbox_text, textbox_text, Controller,
    DialogSession, CANCEL_BUTTON, OK_BUTTON,
};
use crate::dialog_manager::DialogManager;

const DIALOG_ID: &str = "IDD_DATA_REGISTER_EDIT";
const DEVICE_ID_INPUT: &str = "IDC_DEVICE_ID_INPUT";
const OPERATION_DROPDOWN: &str = "IDC_OPERATION_DROPDOWN";
const OPERAND_INPUT: &str = "IDC_OPERAND_INPUT";

const OPERATIONS: [&str; 5] = ["MOV", "ADD", "SUB", "MUL", "DIV"];

/// Validated register operation produced on confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataRegisterResult {
    pub device_id: String,
    pub operation: String,
    pub operand: i32,
}

/// Edits a data-register instruction: target register, operation and operand.
pub struct DataRegisterDialogController {
    session: DialogSession,
    result: Option<DataRegisterResult>,
}

impl DataRegisterDialogController {
    pub fn new() -> Self {
        Self {
            session: DialogSession::new(DIALOG_ID),
            result: None,
        }
    }

    pub fn show(
        &mut self,
        manager: &mut DialogManager,
        device_id: &str,
        operation: &str,
        operand: &str,
    ) {
        self.result = None;
        if !self.session.open(manager) {
            return;
        }
        if let Some(dialog) = self.session.dialog_mut(manager) {
            set_textbox_text(dialog, DEVICE_ID_INPUT, device_id);
            let index = OPERATIONS.iter().position(|&op| op == operation).unwrap_or(0);
            if let Some(dd) = dialog.find_widget_mut(OPERATION_DROPDOWN).and_then(|w| w.as_dropdown_mut()) {
                dd.set_selected_index(index);
            }
            set_textbox_text(dialog, OPERAND_INPUT, operand);
            clear_error(dialog);
        }
    }

    pub fn take_result(&mut self) -> Option<DataRegisterResult> {
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

        let (committed, ok, cancel) = {
            let Some(dialog) = self.session.dialog(manager) else { return };
            let committed = dialog
                .find_widget(OPERATION_DROPDOWN)
                .and_then(|w| w.as_dropdown())
                .and_then(|dd| dd.committed())
                .and_then(|i| OPERATIONS.get(i).copied());
            (
                committed,
                button_pressed(dialog, OK_BUTTON),
                button_pressed(dialog, CANCEL_BUTTON),
            )
        };

        if let Some(operation) = committed {
            self.apply_operand_hint(manager, operation);
        }
        if ok {
            self.confirm(manager);
        } else if cancel {
            self.cancel(manager);
        }
    }

    /// Seed an empty operand field with a starter value for the operation.
    fn apply_operand_hint(&mut self, manager: &mut DialogManager, operation: &str) {
        let hint = match operation {
            "MOV" => "100",
            "ADD" => "10",
            "SUB" => "5",
            "MUL" | "DIV" => "2",
            _ => return,
        };
        if let Some(dialog) = self.session.dialog_mut(manager) {
            let empty = textbox_text(dialog, OPERAND_INPUT).unwrap_or_default().is_empty();
            if empty {
                set_textbox_text(dialog, OPERAND_INPUT, hint);
            }
        }
    }

    fn confirm(&mut self, manager: &mut DialogManager) {
        let Some(dialog) = self.session.dialog(manager) else { return };
        let device_id = textbox_text(dialog, DEVICE_ID_INPUT).unwrap_or_default();
        let device_id = device_id.trim().to_string();
        let operation = dialog
            .find_widget(OPERATION_DROPDOWN)
            .and_then(|w| w.as_dropdown())
            .and_then(|dd| dd.selected_value())
            .unwrap_or("MOV")
            .to_string();
        let operand_text = textbox_text(dialog, OPERAND_INPUT).unwrap_or_default();
        let operand_text = operand_text.trim();

        let outcome = validate_inputs(&device_id, &operation, operand_text);
        match outcome {
            Ok(operand) => {
                if let Some(dialog) = self.session.dialog_mut(manager) {
                    clear_error(dialog);
                }
                self.result = Some(DataRegisterResult { device_id, operation, operand });
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

impl Default for DataRegisterDialogController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for DataRegisterDialogController {
    fn update(&mut self, manager: &mut DialogManager) {
        DataRegisterDialogController::update(self, manager);
    }

    fn is_active(&self, manager: &DialogManager) -> bool {
        DataRegisterDialogController::is_active(self, manager)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn validate_inputs(device_id: &str, operation: &str, operand: &str) -> Result<i32, String> {
    if device_id.is_empty() {
        return Err("Error: Device ID required".to_string());
    }
    if !is_data_register_id(device_id) {
        return Err("Error: Use D0-D12000 format (Mitsubishi PLC)".to_string());
    }
    if operand.is_empty() {
        return Err("Error: Operand value required".to_string());
    }
    let value: i32 = operand
        .parse()
        .map_err(|_| "Error: Enter integer value only".to_string())?;
    if operation == "DIV" && value == 0 {
        return Err("Error: Division by zero not allowed".to_string());
    }
    Ok(value)
}

/// Mitsubishi data register: `D` followed by a decimal number 0-12000.
fn is_data_register_id(device_id: &str) -> bool {
    let Some(digits) = device_id.strip_prefix('D') else {
        return false;
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(digits.parse::<u32>(), Ok(number) if number <= 12000)
}
