//! File-open dialog controller.
//!
//! Binds the open dialog's widgets to a [`FileManager`]: the list box shows
//! the browsed directory, the dropdown narrows the name filters, the
//! checkbox toggles directory display, and activating a directory row
//! navigates into it.

use std::any::Any;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::controllers::{
    button_pressed, set_label, set_textbox_text, textbox_text, Controller, DialogSession,
    CANCEL_BUTTON, OK_BUTTON,
};
use crate::dialog_manager::DialogManager;
use crate::file_manager::{FileItem, FileManager};
use crate::widgets::ListBoxEvent;

const DIALOG_ID: &str = "IDD_FILE_OPEN";
const PATH_DISPLAY: &str = "IDC_PATH_DISPLAY";
const FILE_LIST: &str = "IDC_FILE_LIST";
const FILENAME_INPUT: &str = "IDC_FILENAME_INPUT";
const FILE_FILTER: &str = "IDC_FILE_FILTER";
const SHOW_DIRECTORIES: &str = "IDC_SHOW_DIRECTORIES";
const UP_BUTTON: &str = "IDC_UP_BUTTON";

/// Name patterns for each filter dropdown entry.
fn filters_for(label: &str) -> Vec<&'static str> {
    match label {
        "CSV Files (*.csv)" => vec!["*.csv"],
        "Text Files (*.txt)" => vec!["*.txt"],
        _ => vec!["*.*"],
    }
}

pub struct FileOpenDialogController {
    session: DialogSession,
    result: Option<PathBuf>,
    file_manager: FileManager,
    /// Listed entries, index-aligned with the list box rows.
    entries: Vec<FileItem>,
    last_filter_index: Option<usize>,
}

impl FileOpenDialogController {
    pub fn new(initial_directory: Option<&Path>) -> Self {
        Self {
            session: DialogSession::new(DIALOG_ID),
            result: None,
            file_manager: FileManager::new(initial_directory),
            entries: Vec::new(),
            last_filter_index: None,
        }
    }

    pub fn show(&mut self, manager: &mut DialogManager) {
        self.result = None;
        if !self.session.open(manager) {
            return;
        }
        if let Some(dialog) = self.session.dialog_mut(manager) {
            set_textbox_text(dialog, FILENAME_INPUT, "");
        }
        // Apply whatever filter and directory toggle the dialog starts with.
        let (filter_index, filter_label, show_directories) = {
            match self.session.dialog(manager) {
                Some(dialog) => {
                    let dd = dialog.find_widget(FILE_FILTER).and_then(|w| w.as_dropdown());
                    let cb = dialog.find_widget(SHOW_DIRECTORIES).and_then(|w| w.as_checkbox());
                    (
                        dd.and_then(|d| d.selected_index()),
                        dd.and_then(|d| d.selected_value()).map(str::to_string),
                        cb.map(|c| c.checked()),
                    )
                }
                None => (None, None, None),
            }
        };
        self.last_filter_index = filter_index;
        if let Some(label) = filter_label {
            self.file_manager.set_file_filter(&filters_for(&label));
        }
        if let Some(show) = show_directories {
            self.file_manager.show_directories = show;
        }
        self.refresh(manager);
    }

    /// The confirmed path, consumed on read.
    pub fn take_result(&mut self) -> Option<PathBuf> {
        self.result.take()
    }

    pub fn is_active(&self, manager: &DialogManager) -> bool {
        self.session.is_active(manager)
    }

    pub fn file_manager(&self) -> &FileManager {
        &self.file_manager
    }

    /// Re-list the directory into the list box and path display.
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

        let (list_event, filter_index, filter_label, dirs_toggle, up, ok, cancel) = {
            let Some(dialog) = self.session.dialog(manager) else { return };
            let list = dialog.find_widget(FILE_LIST).and_then(|w| w.as_listbox());
            let dd = dialog.find_widget(FILE_FILTER).and_then(|w| w.as_dropdown());
            let cb = dialog.find_widget(SHOW_DIRECTORIES).and_then(|w| w.as_checkbox());
            (
                list.and_then(|l| l.event()),
                dd.and_then(|d| d.selected_index()),
                dd.and_then(|d| d.selected_value()).map(str::to_string),
                cb.filter(|c| c.just_toggled()).map(|c| c.checked()),
                button_pressed(dialog, UP_BUTTON),
                button_pressed(dialog, OK_BUTTON),
                button_pressed(dialog, CANCEL_BUTTON),
            )
        };

        if filter_index != self.last_filter_index {
            self.last_filter_index = filter_index;
            if let Some(label) = filter_label {
                self.file_manager.set_file_filter(&filters_for(&label));
                self.refresh(manager);
            }
        }

        if let Some(show) = dirs_toggle {
            self.file_manager.show_directories = show;
            self.refresh(manager);
        }

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

    /// A plain selection only mirrors file names into the input box;
    /// directories wait for activation.
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
                if let Some(dialog) = self.session.dialog_mut(manager) {
                    set_textbox_text(dialog, FILENAME_INPUT, "");
                }
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
        let filename = filename.trim();
        if filename.is_empty() {
            debug!("no file selected");
            return;
        }
        let path = self.file_manager.current_path().join(filename);
        info!(path = %path.display(), "file chosen for opening");
        self.result = Some(path);
        self.session.close(manager);
    }

    fn cancel(&mut self, manager: &mut DialogManager) {
        self.result = None;
        self.session.close(manager);
    }
}

impl Controller for FileOpenDialogController {
    fn update(&mut self, manager: &mut DialogManager) {
        FileOpenDialogController::update(self, manager);
    }

    fn is_active(&self, manager: &DialogManager) -> bool {
        FileOpenDialogController::is_active(self, manager)
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
    use crate::test_support::{press_button, type_text};
    use std::fs;

    fn populated_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("circuits")).unwrap();
        fs::write(dir.path().join("circuits").join("inner.csv"), "x").unwrap();
        fs::write(dir.path().join("ladder.csv"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "b").unwrap();
        dir
    }

    fn setup(dir: &Path) -> (DialogManager, FileOpenDialogController) {
        let mut manager = DialogManager::with_builtin_dialogs();
        let mut controller = FileOpenDialogController::new(Some(dir));
        controller.show(&mut manager);
        (manager, controller)
    }

    fn list_items(manager: &DialogManager) -> Vec<String> {
        manager
            .active_dialog()
            .unwrap()
            .find_widget(FILE_LIST)
            .unwrap()
            .as_listbox()
            .unwrap()
            .items()
            .to_vec()
    }

    fn activate_row(manager: &mut DialogManager, controller: &mut FileOpenDialogController, index: usize) {
        // Single-click mode: one row click activates.
        let (x, y) = {
            let dialog = manager.active_dialog().unwrap();
            let list = dialog.find_widget(FILE_LIST).unwrap();
            let b = list.core().bounds(dialog.origin());
            let row_h = dialog
                .find_widget(FILE_LIST)
                .unwrap()
                .as_listbox()
                .unwrap()
                .item_height() as i32;
            (b.x + 20, b.y + 2 + row_h * index as i32 + row_h / 2)
        };
        manager.update(&crate::test_support::click(x, y, 0.0), &crate::test_support::settings());
        controller.update(manager);
    }

    #[test]
    fn show_lists_the_initial_directory() {
        let dir = populated_dir();
        let (manager, controller) = setup(dir.path());
        assert!(controller.is_active(&manager));
        assert_eq!(
            list_items(&manager),
            vec!["[DIR] circuits", "ladder.csv", "notes.txt"]
        );
        let path_label = manager
            .active_dialog()
            .unwrap()
            .find_widget(PATH_DISPLAY)
            .unwrap()
            .as_label()
            .unwrap()
            .text()
            .to_string();
        assert!(!path_label.is_empty());
    }

    #[test]
    fn activating_a_file_fills_the_name_box() {
        let dir = populated_dir();
        let (mut manager, mut controller) = setup(dir.path());
        activate_row(&mut manager, &mut controller, 1);
        let dialog = manager.active_dialog().unwrap();
        assert_eq!(textbox_text(dialog, FILENAME_INPUT).unwrap(), "ladder.csv");
    }

    #[test]
    fn activating_a_directory_navigates_into_it() {
        let dir = populated_dir();
        let (mut manager, mut controller) = setup(dir.path());
        activate_row(&mut manager, &mut controller, 0);
        assert_eq!(
            controller.file_manager().current_path(),
            dir.path().join("circuits")
        );
        assert_eq!(list_items(&manager), vec!["inner.csv"]);
    }

    #[test]
    fn up_button_returns_to_the_parent() {
        let dir = populated_dir();
        let (mut manager, mut controller) = setup(dir.path());
        activate_row(&mut manager, &mut controller, 0);
        press_button(&mut manager, UP_BUTTON, 1.0);
        controller.update(&mut manager);
        assert_eq!(controller.file_manager().current_path(), dir.path());
    }

    #[test]
    fn confirm_joins_the_current_directory() {
        let dir = populated_dir();
        let (mut manager, mut controller) = setup(dir.path());
        type_text(&mut manager, FILENAME_INPUT, "ladder.csv");
        press_button(&mut manager, OK_BUTTON, 0.0);
        controller.update(&mut manager);
        assert_eq!(controller.take_result(), Some(dir.path().join("ladder.csv")));
        assert!(manager.active_dialog().is_none());
    }

    #[test]
    fn confirm_with_empty_name_keeps_the_dialog_open() {
        let dir = populated_dir();
        let (mut manager, mut controller) = setup(dir.path());
        press_button(&mut manager, OK_BUTTON, 0.0);
        controller.update(&mut manager);
        assert_eq!(controller.take_result(), None);
        assert!(controller.is_active(&manager));
    }

    #[test]
    fn cancel_produces_no_result() {
        let dir = populated_dir();
        let (mut manager, mut controller) = setup(dir.path());
        press_button(&mut manager, CANCEL_BUTTON, 0.0);
        controller.update(&mut manager);
        assert_eq!(controller.take_result(), None);
        assert!(manager.active_dialog().is_none());
    }

    #[test]
    fn changing_the_filter_refreshes_the_list() {
        let dir = populated_dir();
        let (mut manager, mut controller) = setup(dir.path());
        let s = crate::test_support::settings();
        let (center, row1) = {
            let dialog = manager.active_dialog().unwrap();
            let dd = dialog.find_widget(FILE_FILTER).unwrap();
            let b = dd.core().bounds(dialog.origin());
            (
                (b.x + 50, b.y + 6),
                (b.x + 36, b.bottom() + 15),
            )
        };
        // Open the dropdown, then commit "CSV Files (*.csv)".
        manager.update(&crate::test_support::click(center.0, center.1, 0.0), &s);
        manager.update(&crate::test_support::click(row1.0, row1.1, 0.1), &s);
        controller.update(&mut manager);
        assert_eq!(list_items(&manager), vec!["[DIR] circuits", "ladder.csv"]);
    }

    #[test]
    fn toggling_directories_off_hides_them() {
        let dir = populated_dir();
        let (mut manager, mut controller) = setup(dir.path());
        press_button(&mut manager, SHOW_DIRECTORIES, 0.0);
        controller.update(&mut manager);
        assert_eq!(list_items(&manager), vec!["ladder.csv", "notes.txt"]);
    }

    #[test]
    fn filter_labels_map_to_patterns() {
        assert_eq!(filters_for("All Files (*.*)"), vec!["*.*"]);
        assert_eq!(filters_for("CSV Files (*.csv)"), vec!["*.csv"]);
        assert_eq!(filters_for("Text Files (*.txt)"), vec!["*.txt"]);
        assert_eq!(filters_for("anything else"), vec!["*.*"]);
    }
}
