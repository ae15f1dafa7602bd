//! Dialog chrome styling resolved from declarative color names.

use tracing::warn;

use crate::definition::StyleDefinition;
use crate::platform::Color;

/// Concrete colors for a dialog's chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogStyle {
    pub background: Color,
    pub title_bar: Color,
    pub border: Color,
    pub title_text: Color,
}

impl Default for DialogStyle {
    fn default() -> Self {
        Self {
            background: Color::White,
            title_bar: Color::Navy,
            border: Color::Black,
            title_text: Color::White,
        }
    }
}

impl DialogStyle {
    /// Resolve a declarative style, falling back to the default per slot for
    /// absent or unresolvable names.
    pub fn resolve(def: &StyleDefinition) -> Self {
        let base = Self::default();
        Self {
            background: resolve_color(def.background.as_deref(), base.background),
            title_bar: resolve_color(def.title_bar.as_deref(), base.title_bar),
            border: resolve_color(def.border.as_deref(), base.border),
            title_text: base.title_text,
        }
    }
}

/// Resolve an optional color name, warning when the name is unknown.
pub fn resolve_color(name: Option<&str>, default: Color) -> Color {
    match name {
        None => default,
        Some(n) => Color::from_name(n).unwrap_or_else(|| {
            warn!(color = n, "unknown color name in dialog definition");
            default
        }),
    }
}
