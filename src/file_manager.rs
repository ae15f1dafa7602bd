//! File-system collaborator for the open/save dialogs.

use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::warn;

/// One directory entry, ready for list display.
#[derive(Clone, Debug)]
pub struct FileItem {
    pub path: PathBuf,
    pub name: String,
    pub is_directory: bool,
    pub size: u64,
}

impl FileItem {
    pub fn new(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let meta = std::fs::metadata(path).ok();
        let is_directory = meta.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = meta
            .as_ref()
            .filter(|m| m.is_file())
            .map(|m| m.len())
            .unwrap_or(0);
        Self {
            path: path.to_path_buf(),
            name,
            is_directory,
            size,
        }
    }

    /// List display name; directories carry a distinct prefix.
    pub fn display_name(&self) -> String {
        if self.is_directory {
            format!("[DIR] {}", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Tracks the browsed directory and the active name filters.
pub struct FileManager {
    current_path: PathBuf,
    filters: Vec<Pattern>,
    pub show_directories: bool,
    pub show_hidden_files: bool,
}

impl FileManager {
    /// Start at `initial` when it is an existing directory, else at the
    /// process working directory.
    pub fn new(initial: Option<&Path>) -> Self {
        let current_path = initial
            .filter(|p| p.is_dir())
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        let mut manager = Self {
            current_path,
            filters: Vec::new(),
            show_directories: true,
            show_hidden_files: false,
        };
        manager.set_file_filter(&["*.*"]);
        manager
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Returns false (and stays put) when `path` is not a directory.
    pub fn set_current_path(&mut self, path: &Path) -> bool {
        if path.is_dir() {
            self.current_path = path.to_path_buf();
            true
        } else {
            false
        }
    }

    pub fn parent_directory(&self) -> Option<PathBuf> {
        self.current_path.parent().map(Path::to_path_buf)
    }

    /// Move to the parent directory; false at the filesystem root.
    pub fn go_up(&mut self) -> bool {
        match self.parent_directory() {
            Some(parent) => self.set_current_path(&parent),
            None => false,
        }
    }

    /// Replace the name filters; invalid patterns are skipped with a warning
    /// and an empty result falls back to `*.*`.
    pub fn set_file_filter(&mut self, filters: &[&str]) {
        let mut compiled = Vec::new();
        for &filter in filters {
            match Pattern::new(&filter.to_lowercase()) {
                Ok(pattern) => compiled.push(pattern),
                Err(err) => warn!(filter, %err, "invalid file filter pattern"),
            }
        }
        if compiled.is_empty() {
            compiled.push(Pattern::new("*.*").expect("literal pattern"));
        }
        self.filters = compiled;
    }

    fn matches_filter(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.filters.iter().any(|p| p.matches(&name))
    }

    fn is_hidden(name: &str) -> bool {
        name.starts_with('.')
    }

    /// Sorted listing of the current directory: directories first, then
    /// files passing the name filters. Unreadable directories list empty.
    pub fn list_directory(&self) -> Vec<FileItem> {
        let Ok(entries) = std::fs::read_dir(&self.current_path) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|n| self.show_hidden_files || !Self::is_hidden(n))
            .collect();
        names.sort();

        let mut items = Vec::new();
        if self.show_directories {
            for name in &names {
                let full = self.current_path.join(name);
                if full.is_dir() {
                    items.push(FileItem::new(&full));
                }
            }
        }
        for name in &names {
            let full = self.current_path.join(name);
            if full.is_file() && self.matches_filter(name) {
                items.push(FileItem::new(&full));
            }
        }
        items
    }

    /// Display path, shortened to `.../parent/name` beyond 40 characters.
    pub fn display_path(&self) -> String {
        let path = self.current_path.to_string_lossy();
        if path.chars().count() <= 40 {
            return path.into_owned();
        }
        let mut parts = Vec::new();
        if let Some(name) = self.current_path.file_name() {
            parts.push(name.to_string_lossy().into_owned());
        }
        if let Some(parent_name) = self
            .current_path
            .parent()
            .and_then(|p| p.file_name())
        {
            parts.push(parent_name.to_string_lossy().into_owned());
        }
        parts.push("...".to_string());
        parts.reverse();
        parts.join(std::path::MAIN_SEPARATOR_STR)
    }
}
