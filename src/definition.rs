//! Declarative dialog definitions.
//!
//! Definitions are a JSON object keyed by dialog id, loaded once at startup
//! and read-only thereafter. All geometry and widget fields carry defaults so
//! definition authors only write what differs.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// The loaded, immutable definition table.
pub type DefinitionSet = HashMap<String, DialogDefinition>;

#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read dialog definitions: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dialog definitions: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Deserialize)]
pub struct DialogDefinition {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default = "default_dialog_extent")]
    pub width: u32,
    #[serde(default = "default_dialog_extent")]
    pub height: u32,
    #[serde(default = "default_dialog_title")]
    pub title: String,
    #[serde(default)]
    pub style: StyleDefinition,
    #[serde(default)]
    pub widgets: Vec<WidgetDefinition>,
}

fn default_dialog_extent() -> u32 {
    100
}

fn default_dialog_title() -> String {
    "Dialog".to_string()
}

/// Declarative chrome colors, as `"COLOR_*"` names. Absent or unresolvable
/// entries fall back to the default style.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StyleDefinition {
    pub background: Option<String>,
    pub title_bar: Option<String>,
    pub border: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WidgetDefinition {
    /// Absent for static decorations that are never looked up.
    pub id: Option<String>,
    /// Type tag resolved by the widget factory; unknown tags are skipped.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub item_height: Option<u32>,
    #[serde(default)]
    pub max_visible_items: Option<usize>,
}

/// Parse a definition set from a JSON string.
pub fn from_json_str(json: &str) -> Result<DefinitionSet, DefinitionError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a definition set from a JSON file.
pub fn from_path(path: impl AsRef<Path>) -> Result<DefinitionSet, DefinitionError> {
    let json = std::fs::read_to_string(path)?;
    from_json_str(&json)
}

/// The stock dialogs shipped with the toolkit (device-id, timer/counter,
/// compare, data-register, file open/save).
pub fn builtin() -> DefinitionSet {
    from_json_str(include_str!("dialogs.json")).expect("built-in dialog definitions parse")
}
