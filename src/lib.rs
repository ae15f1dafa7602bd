//! Retained-mode modal dialog and widget toolkit for the ladder editor
//! simulator.
//!
//! The host application loads a set of declarative [`definition`]s, drives
//! the [`DialogManager`] once per frame (`update` with a captured
//! [`InputSnapshot`], then `draw` against its [`Platform`]), and talks to the
//! feature controllers in [`controllers`] to open dialogs and collect their
//! typed results:
//!
//! ```no_run
//! # fn frame(platform: &mut dyn ladder_dialogs::Platform) {
//! use ladder_dialogs::{DialogManager, InputSnapshot, Settings};
//! use ladder_dialogs::controllers::DeviceIdDialogController;
//! use ladder_dialogs::device::DeviceType;
//!
//! let settings = Settings::new();
//! let mut manager = DialogManager::with_builtin_dialogs();
//! let mut editor = DeviceIdDialogController::new();
//! editor.show(&mut manager, DeviceType::ContactA, "X0");
//!
//! // Every frame:
//! let input = InputSnapshot::capture(platform);
//! manager.update(&input, &settings);
//! editor.update(&mut manager);
//! if let Some(result) = editor.take_result() {
//!     println!("new address: {}", result.address);
//! }
//! manager.draw(platform);
//! # }
//! ```

pub mod controllers;
pub mod definition;
pub mod device;
pub mod dialog;
pub mod dialog_manager;
pub mod file_manager;
pub mod geom;
pub mod input;
pub mod platform;
pub mod settings;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_support;

pub use definition::{DefinitionError, DefinitionSet, DialogDefinition, WidgetDefinition};
pub use dialog::Dialog;
pub use dialog_manager::{DialogHandle, DialogManager};
pub use geom::Rect;
pub use input::{InputSnapshot, Key};
pub use platform::{Color, Platform, FONT_HEIGHT, FONT_WIDTH};
pub use settings::{ClickMode, Settings};
pub use theme::DialogStyle;
pub use widgets::{ListBoxEvent, Widget};
