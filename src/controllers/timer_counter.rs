//! Timer/counter preset edit dialog controller.

use std::any::Any;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::controllers::{
    button_pressed, clear_error, set_error, set_label, set_textbox_text, textbox_text, Controller,
    DialogSession, CANCEL_BUTTON, OK_BUTTON,
};
use crate::device::{
    DeviceType, COUNTER_PRESET_MAX, COUNTER_PRESET_MIN, TIMER_PRESET_MAX, TIMER_PRESET_MIN,
};
use crate::dialog_manager::DialogManager;

const DIALOG_ID: &str = "IDD_TIMER_COUNTER_EDIT";
const TYPE_LABEL: &str = "IDC_LABEL_TYPE";
const DEVICE_ID_INPUT: &str = "IDC_DEVICE_ID_INPUT";
const PRESET_INPUT: &str = "IDC_PRESET_INPUT";

static TIMER_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^T(\d+)$").expect("timer id regex"));
static COUNTER_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^C(\d+)$").expect("counter id regex"));

/// Validated device id and preset produced on confirm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerCounterResult {
    pub device_id: String,
    pub preset: i32,
}

/// Edits a timer or counter's device id and preset value together.
pub struct TimerCounterDialogController {
    session: DialogSession,
    result: Option<TimerCounterResult>,
    device_type: Option<DeviceType>,
    last_device_id: String,
    last_preset: String,
}

impl TimerCounterDialogController {
    pub fn new() -> Self {
        Self {
            session: DialogSession::new(DIALOG_ID),
            result: None,
            device_type: None,
            last_device_id: String::new(),
            last_preset: String::new(),
        }
    }

    pub fn show(
        &mut self,
        manager: &mut DialogManager,
        device_type: DeviceType,
        initial_preset: i32,
        initial_device_id: &str,
    ) {
        self.result = None;
        self.device_type = Some(device_type);
        self.last_device_id = initial_device_id.to_string();
        self.last_preset = initial_preset.to_string();
        if !self.session.open(manager) {
            return;
        }
        if let Some(dialog) = self.session.dialog_mut(manager) {
            dialog.set_title(format!("Edit {} Settings", device_type.label()));
            set_label(dialog, TYPE_LABEL, &format!("Type: {}", device_type.label()));
            set_textbox_text(dialog, DEVICE_ID_INPUT, initial_device_id);
            set_textbox_text(dialog, PRESET_INPUT, &initial_preset.to_string());
            clear_error(dialog);
        }
    }

    pub fn take_result(&mut self) -> Option<TimerCounterResult> {
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
            let device_id = textbox_text(dialog, DEVICE_ID_INPUT).unwrap_or_default();
            let preset = textbox_text(dialog, PRESET_INPUT).unwrap_or_default();
            if device_id != self.last_device_id || preset != self.last_preset {
                self.last_device_id = device_id.clone();
                self.last_preset = preset.clone();
                let message = live_validation_message(device_type, &device_id, &preset);
                match message {
                    Some(message) => set_error(dialog, &message),
                    None => clear_error(dialog),
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
        let device_id = textbox_text(dialog, DEVICE_ID_INPUT)
            .unwrap_or_default()
            .trim()
            .to_uppercase();
        let preset_text = textbox_text(dialog, PRESET_INPUT).unwrap_or_default();
        let preset_text = preset_text.trim();

        let outcome = validate_device_id(device_type, &device_id)
            .and_then(|()| validate_preset(device_type, preset_text));
        match outcome {
            Ok(preset) => {
                self.result = Some(TimerCounterResult { device_id, preset });
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

impl Default for TimerCounterDialogController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for TimerCounterDialogController {
    fn update(&mut self, manager: &mut DialogManager) {
        TimerCounterDialogController::update(self, manager);
    }

    fn is_active(&self, manager: &DialogManager) -> bool {
        TimerCounterDialogController::is_active(self, manager)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// First failure among the two fields, skipping fields left empty.
fn live_validation_message(device_type: DeviceType, device_id: &str, preset: &str) -> Option<String> {
    let device_id = device_id.trim();
    if !device_id.is_empty() {
        if let Err(message) = validate_device_id(device_type, &device_id.to_uppercase()) {
            return Some(message);
        }
    }
    let preset = preset.trim();
    if !preset.is_empty() {
        if let Err(message) = validate_preset(device_type, preset) {
            return Some(message);
        }
    }
    None
}

fn validate_device_id(device_type: DeviceType, device_id: &str) -> Result<(), String> {
    if device_id.is_empty() {
        return Err("Device ID cannot be empty.".to_string());
    }
    match device_type {
        DeviceType::TimerTon => {
            let Some(caps) = TIMER_ID_RE.captures(device_id) else {
                return Err("Timer ID must be T followed by number (e.g., T1).".to_string());
            };
            let number: u32 = caps[1]
                .parse()
                .map_err(|_| "Timer number must be 0-255.".to_string())?;
            if number > 255 {
                return Err("Timer number must be 0-255.".to_string());
            }
        }
        DeviceType::CounterCtu => {
            let Some(caps) = COUNTER_ID_RE.captures(device_id) else {
                return Err("Counter ID must be C followed by number (e.g., C1).".to_string());
            };
            let number: u32 = caps[1]
                .parse()
                .map_err(|_| "Counter number must be 0-255.".to_string())?;
            if number > 255 {
                return Err("Counter number must be 0-255.".to_string());
            }
        }
        other => return Err(format!("Invalid device type: {}", other.label())),
    }
    Ok(())
}

fn validate_preset(device_type: DeviceType, preset: &str) -> Result<i32, String> {
    if preset.is_empty() {
        return Err("Preset value cannot be empty.".to_string());
    }
    let value: i32 = preset
        .parse()
        .map_err(|_| "Preset value must be an integer.".to_string())?;
    match device_type {
        DeviceType::TimerTon => {
            if !(TIMER_PRESET_MIN..=TIMER_PRESET_MAX).contains(&value) {
                return Err(format!(
                    "Timer preset must be {TIMER_PRESET_MIN}-{TIMER_PRESET_MAX}."
                ));
            }
        }
        DeviceType::CounterCtu => {
            if !(COUNTER_PRESET_MIN..=COUNTER_PRESET_MAX).contains(&value) {
                return Err(format!(
                    "Counter preset must be {COUNTER_PRESET_MIN}-{COUNTER_PRESET_MAX}."
                ));
            }
        }
        other => return Err(format!("Invalid device type: {}", other.label())),
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{press_button, type_text};

    fn setup() -> (DialogManager, TimerCounterDialogController) {
        let mut manager = DialogManager::with_builtin_dialogs();
        let mut controller = TimerCounterDialogController::new();
        controller.show(&mut manager, DeviceType::TimerTon, 30, "T1");
        (manager, controller)
    }

    #[test]
    fn show_seeds_both_inputs() {
        let (manager, _) = setup();
        let dialog = manager.active_dialog().unwrap();
        assert_eq!(dialog.title(), "Edit TIMER_TON Settings");
        assert_eq!(textbox_text(dialog, DEVICE_ID_INPUT).unwrap(), "T1");
        assert_eq!(textbox_text(dialog, PRESET_INPUT).unwrap(), "30");
    }

    #[test]
    fn confirm_yields_id_and_parsed_preset() {
        let (mut manager, mut controller) = setup();
        type_text(&mut manager, DEVICE_ID_INPUT, "T12");
        type_text(&mut manager, PRESET_INPUT, "250");
        press_button(&mut manager, OK_BUTTON, 0.0);
        controller.update(&mut manager);
        assert_eq!(
            controller.take_result(),
            Some(TimerCounterResult { device_id: "T12".to_string(), preset: 250 })
        );
        assert!(manager.active_dialog().is_none());
    }

    #[test]
    fn bad_device_id_blocks_confirm() {
        let (mut manager, mut controller) = setup();
        type_text(&mut manager, DEVICE_ID_INPUT, "C1");
        press_button(&mut manager, OK_BUTTON, 0.0);
        controller.update(&mut manager);
        assert_eq!(controller.take_result(), None);
        assert!(controller.is_active(&manager));
    }

    #[test]
    fn non_integer_preset_blocks_confirm() {
        let (mut manager, mut controller) = setup();
        type_text(&mut manager, PRESET_INPUT, "30s");
        press_button(&mut manager, OK_BUTTON, 0.0);
        controller.update(&mut manager);
        assert_eq!(controller.take_result(), None);
        assert!(controller.is_active(&manager));
    }

    #[test]
    fn preset_range_is_enforced_per_type() {
        assert!(validate_preset(DeviceType::TimerTon, "0").is_ok());
        assert!(validate_preset(DeviceType::TimerTon, "32767").is_ok());
        assert!(validate_preset(DeviceType::TimerTon, "32768").is_err());
        assert!(validate_preset(DeviceType::CounterCtu, "-1").is_err());
    }

    #[test]
    fn device_id_rules_match_the_device_type() {
        assert!(validate_device_id(DeviceType::TimerTon, "T0").is_ok());
        assert!(validate_device_id(DeviceType::TimerTon, "T256").is_err());
        assert!(validate_device_id(DeviceType::TimerTon, "C1").is_err());
        assert!(validate_device_id(DeviceType::CounterCtu, "C255").is_ok());
        assert!(validate_device_id(DeviceType::ContactA, "X0").is_err());
    }

    #[test]
    fn cancel_produces_no_result() {
        let (mut manager, mut controller) = setup();
        press_button(&mut manager, CANCEL_BUTTON, 0.0);
        controller.update(&mut manager);
        assert_eq!(controller.take_result(), None);
        assert!(manager.active_dialog().is_none());
    }
}
