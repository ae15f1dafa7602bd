//! Host platform capability: input queries and primitive drawing.
//!
//! The toolkit never talks to a window system directly. The host application
//! implements [`Platform`] on top of whatever backend it uses and hands it to
//! [`crate::DialogManager::draw`] and [`crate::InputSnapshot::capture`].

use crate::input::Key;

/// Width in pixels of one character cell of the built-in bitmap font.
pub const FONT_WIDTH: u32 = 4;
/// Height in pixels of one character cell of the built-in bitmap font.
pub const FONT_HEIGHT: u32 = 6;

/// Pixel width of `text` in the built-in font.
pub fn text_width(text: &str) -> u32 {
    text.chars().count() as u32 * FONT_WIDTH
}

/// The fixed 16-color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Navy,
    Purple,
    Green,
    Brown,
    DarkBlue,
    LightBlue,
    White,
    Red,
    Orange,
    Yellow,
    Lime,
    Cyan,
    Gray,
    Pink,
    Peach,
}

impl Color {
    /// Resolve a declarative `"COLOR_*"` name from a dialog definition.
    pub fn from_name(name: &str) -> Option<Color> {
        match name {
            "COLOR_BLACK" => Some(Color::Black),
            "COLOR_NAVY" => Some(Color::Navy),
            "COLOR_PURPLE" => Some(Color::Purple),
            "COLOR_GREEN" => Some(Color::Green),
            "COLOR_BROWN" => Some(Color::Brown),
            "COLOR_DARK_BLUE" => Some(Color::DarkBlue),
            "COLOR_LIGHT_BLUE" => Some(Color::LightBlue),
            "COLOR_WHITE" => Some(Color::White),
            "COLOR_RED" => Some(Color::Red),
            "COLOR_ORANGE" => Some(Color::Orange),
            "COLOR_YELLOW" => Some(Color::Yellow),
            "COLOR_LIME" => Some(Color::Lime),
            "COLOR_CYAN" => Some(Color::Cyan),
            "COLOR_GRAY" => Some(Color::Gray),
            "COLOR_PINK" => Some(Color::Pink),
            "COLOR_PEACH" => Some(Color::Peach),
            _ => None,
        }
    }
}

/// Injected capability the toolkit runs against.
///
/// Input queries are sampled once per frame into an
/// [`crate::InputSnapshot`]; draw calls are only made from `draw` paths.
pub trait Platform {
    /// Current pointer position in screen pixels.
    fn mouse_position(&self) -> (i32, i32);
    /// Left pointer button press edge for the current frame.
    fn mouse_pressed(&self) -> bool;
    /// Left pointer button level (held).
    fn mouse_down(&self) -> bool;
    /// Key press edge for the current frame.
    fn key_pressed(&self, key: Key) -> bool;
    /// Key level (held).
    fn key_down(&self, key: Key) -> bool;
    /// Monotonic wall clock in seconds.
    fn now(&self) -> f64;

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);
    fn stroke_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color);
    fn triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color);
    fn text(&mut self, x: i32, y: i32, text: &str, color: Color);
}
