//! File-save dialog controller.
//!
//! Same file-system binding as the open dialog, plus default-extension
//! handling: a name entered without an extension gets the controller's
//! default appended at confirm time.

use std::any::Any;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::controllers::{
    button_pressed, set_label, set_textbox_text, textbox_text, Controller, DialogSession,
    CANCEL_BUTTON, OK_BUTTON,
};
use crate::dialog_manager::DialogManager;
use crate::file_manager::{FileItem, FileManager};
use crate::widgets::ListBoxEvent;

const DIALOG_ID: &str = "IDD_SAVE_AS";
const PATH_DISPLAY: &str = "IDC_PATH_DISPLAY";
const FILE_LIST: &str = "IDC_FILE_LIST";
const FILENAME_INPUT: &str = "IDC_FILENAME_INPUT";
const UP_BUTTON: &str = "IDC_UP_BUTTON";

pub struct FileSaveDialogController {
    session: DialogSession,
    result: Option<PathBuf>,
    file_manager: FileManager,
    entries: Vec<FileItem>,
    /// Extension appended when the entered name has none; empty disables.
    default_extension: String,
}

impl FileSaveDialogController {
    pub fn new(initial_directory: Option<&Path>) -> Self {
        Self {
            session: DialogSession::new(DIALOG_ID),
            result: None,
            file_manager: FileManager::new(initial_directory),
            entries: Vec::new(),
            default_extension: ".txt".to_string(),
        }
    }

    /// Normalizes a missing leading dot; an empty string disables the
    /// default extension.
    pub fn set_default_extension(&mut self, extension: &str) {
        self.default_extension = if extension.is_empty() || extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{extension}")
        };
    }

    pub fn show(&mut self, manager: &mut DialogManager, default_filename: &str) {
        self.result = None;
        if !self.session.open(manager) {
            return;
        }
        let display = if default_filename.is_empty() {
            self.display_filename("untitled")
        } else {
            self.display_filename(default_filename)
        };
        if let Some(dialog) = self.session.dialog_mut(manager) {
            set_textbox_text(dialog, FILENAME_INPUT, &display);
        }
        self.refresh(manager);
    }

    pub fn take_result(&mut self) -> Option<PathBuf> {
        self.result.take()
    }

    pub fn is_active(&self, manager: &DialogManager) -> bool {
        self.session.is_active(manager)
    }

    pub fn file_manager(&self) -> &FileManager {
        &self.file_manager
    }

    /// Initial display name: the stem with the default extension applied.
    fn display_filename(&self, base: &str) -> String {
        let base = base.trim();
        let stem = match base.rfind('.') {
            Some(dot) if dot > 0 => &base[..dot],
            _ => base,
        };
        if self.default_extension.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}{}", self.default_extension)
        }
    }

    /// Final name at confirm time: extension appended only when absent.
    fn final_filename(&self, input: &str) -> String {
        let input = input.trim();
        let has_extension = matches!(input.rfind('.'), Some(dot) if dot > 0);
        if !self.default_extension.is_empty() && !has_extension {
            format!("{input}{}", self.default_extension)
        } else {
            input.to_string()
        }
    }

    fn refresh(&mut self, manager: &mut DialogManager) {
        self.entries = self.file_manager.list_directory();
        let names: Vec<String> = self.entries.iter().map(FileItem::display_name).collect();
        let path = self.file_manager.display_path();
        debug!(count = names.len(), path = %path, "file list refreshed");
        if let Some(dialog) = self.session.dialog_mut(manager) {
            if let Some(list) = dialog.find_widget_mut(FILE_LIST).and_then(|w| w.as_listbox_mut()) {
                list.set_items(names);
            }
            set_label(dialog, PATH_DISPLAY, &path);
        }
    }

    pub fn update(&mut self, manager: &mut DialogManager) {
        self.session.sync(manager);
        if !self.session.is_active(manager) {
            return;
        }

        let (list_event, up, ok, cancel) = {
            let Some(dialog) = self.session.dialog(manager) else { return };
            let list = dialog.find_widget(FILE_LIST).and_then(|w| w.as_listbox());
            (
                list.and_then(|l| l.event()),
                button_pressed(dialog, UP_BUTTON),
                button_pressed(dialog, OK_BUTTON),
                button_pressed(dialog, CANCEL_BUTTON),
            )
        };

        match list_event {
            Some(ListBoxEvent::Selected(index)) => self.on_row_selected(manager, index),
            Some(ListBoxEvent::Activated(index)) => self.on_row_activated(manager, index),
            None => {}
        }

        if up {
            if self.file_manager.go_up() {
                self.refresh(manager);
            } else {
                debug!("already at root directory");
            }
        } else if ok {
            self.confirm(manager);
        } else if cancel {
            self.cancel(manager);
        }
    }

    fn on_row_selected(&mut self, manager: &mut DialogManager, index: usize) {
        let Some(item) = self.entries.get(index) else { return };
        if !item.is_directory {
            let name = item.name.clone();
            if let Some(dialog) = self.session.dialog_mut(manager) {
                set_textbox_text(dialog, FILENAME_INPUT, &name);
            }
        }
    }

    fn on_row_activated(&mut self, manager: &mut DialogManager, index: usize) {
        let Some(item) = self.entries.get(index) else { return };
        if item.is_directory {
            let path = item.path.clone();
            if self.file_manager.set_current_path(&path) {
                info!(path = %path.display(), "navigated");
                self.refresh(manager);
            }
        } else {
            let name = item.name.clone();
            if let Some(dialog) = self.session.dialog_mut(manager) {
                set_textbox_text(dialog, FILENAME_INPUT, &name);
            }
        }
    }

    fn confirm(&mut self, manager: &mut DialogManager) {
        let filename = self
            .session
            .dialog(manager)
            .and_then(|d| textbox_text(d, FILENAME_INPUT))
            .unwrap_or_default();
        if filename.trim().is_empty() {
            debug!("no filename entered");
            return;
        }
        let final_name = self.final_filename(&filename);
        let path = if Path::new(&final_name).is_absolute() {
            PathBuf::from(&final_name)
        } else {
            self.file_manager.current_path().join(&final_name)
        };
        if path.exists() {
            warn!(path = %path.display(), "file already exists, will overwrite");
        }
        info!(path = %path.display(), "file chosen for saving");
        self.result = Some(path);
        self.session.close(manager);
    }

    fn cancel(&mut self, manager: &mut DialogManager) {
        self.result = None;
        self.session.close(manager);
    }
}

impl Controller for FileSaveDialogController {
    fn update(&mut self, manager: &mut DialogManager) {
        FileSaveDialogController::update(self, manager);
    }

    fn is_active(&self, manager: &DialogManager) -> bool {
        FileSaveDialogController::is_active(self, manager)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
