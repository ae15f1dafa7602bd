//! Per-frame input snapshots and the printable-key table.

use crate::platform::Platform;

/// The fixed key set the toolkit understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    Minus,
    Equals,
    Comma,
    Period,
    Slash,
    Semicolon,
    Quote,
    Space,
    Left,
    Right,
    Backspace,
    Delete,
    Shift,
}

impl Key {
    /// Every key, in a fixed order, for snapshot capture.
    pub const ALL: [Key; 49] = [
        Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
        Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
        Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
        Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
        Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
        Key::Minus, Key::Equals, Key::Comma, Key::Period, Key::Slash,
        Key::Semicolon, Key::Quote, Key::Space, Key::Left, Key::Right,
        Key::Backspace, Key::Delete, Key::Shift,
    ];
}

/// Map a key edge to the character it types, honoring shift.
///
/// Letters follow shift case; the symbol/number remappings are the fixed US
/// layout table. Non-printable keys return `None`.
pub fn printable(key: Key, shift: bool) -> Option<char> {
    let ch = match key {
        Key::A => 'a', Key::B => 'b', Key::C => 'c', Key::D => 'd', Key::E => 'e',
        Key::F => 'f', Key::G => 'g', Key::H => 'h', Key::I => 'i', Key::J => 'j',
        Key::K => 'k', Key::L => 'l', Key::M => 'm', Key::N => 'n', Key::O => 'o',
        Key::P => 'p', Key::Q => 'q', Key::R => 'r', Key::S => 's', Key::T => 't',
        Key::U => 'u', Key::V => 'v', Key::W => 'w', Key::X => 'x', Key::Y => 'y',
        Key::Z => 'z',
        Key::Digit0 => if shift { ')' } else { '0' },
        Key::Digit1 => if shift { '!' } else { '1' },
        Key::Digit2 => if shift { '@' } else { '2' },
        Key::Digit3 => if shift { '#' } else { '3' },
        Key::Digit4 => if shift { '$' } else { '4' },
        Key::Digit5 => if shift { '%' } else { '5' },
        Key::Digit6 => if shift { '^' } else { '6' },
        Key::Digit7 => if shift { '&' } else { '7' },
        Key::Digit8 => if shift { '*' } else { '8' },
        Key::Digit9 => if shift { '(' } else { '9' },
        Key::Minus => if shift { '_' } else { '-' },
        Key::Equals => if shift { '+' } else { '=' },
        Key::Comma => if shift { '<' } else { ',' },
        Key::Period => if shift { '>' } else { '.' },
        Key::Slash => if shift { '?' } else { '/' },
        Key::Semicolon => if shift { ':' } else { ';' },
        Key::Quote => if shift { '"' } else { '\'' },
        Key::Space => ' ',
        _ => return None,
    };
    if ch.is_ascii_lowercase() && shift {
        Some(ch.to_ascii_uppercase())
    } else {
        Some(ch)
    }
}

/// One frame of input, frozen at capture time.
///
/// Hit-testing and key handling always read the snapshot of the current
/// frame; nothing is buffered across frames.
#[derive(Clone, Debug, Default)]
pub struct InputSnapshot {
    pub mouse_x: i32,
    pub mouse_y: i32,
    /// Left button press edge this frame.
    pub clicked: bool,
    /// Left button level.
    pub mouse_down: bool,
    /// Shift level.
    pub shift: bool,
    /// Key press edges this frame, in capture order.
    pub pressed: Vec<Key>,
    /// Wall clock in seconds at capture time.
    pub now: f64,
}

impl InputSnapshot {
    /// Sample the platform once for this frame.
    pub fn capture(platform: &dyn Platform) -> Self {
        let (mouse_x, mouse_y) = platform.mouse_position();
        let pressed = Key::ALL
            .iter()
            .copied()
            .filter(|&k| k != Key::Shift && platform.key_pressed(k))
            .collect();
        Self {
            mouse_x,
            mouse_y,
            clicked: platform.mouse_pressed(),
            mouse_down: platform.mouse_down(),
            shift: platform.key_down(Key::Shift),
            pressed,
            now: platform.now(),
        }
    }

    pub fn mouse(&self) -> (i32, i32) {
        (self.mouse_x, self.mouse_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_follow_shift_case() {
        assert_eq!(printable(Key::T, false), Some('t'));
        assert_eq!(printable(Key::T, true), Some('T'));
    }

    #[test]
    fn digits_remap_when_shifted() {
        assert_eq!(printable(Key::Digit1, false), Some('1'));
        assert_eq!(printable(Key::Digit1, true), Some('!'));
        assert_eq!(printable(Key::Digit0, true), Some(')'));
    }

    #[test]
    fn symbols_remap_when_shifted() {
        assert_eq!(printable(Key::Minus, true), Some('_'));
        assert_eq!(printable(Key::Equals, false), Some('='));
        assert_eq!(printable(Key::Equals, true), Some('+'));
        assert_eq!(printable(Key::Comma, true), Some('<'));
    }

    #[test]
    fn editing_keys_are_not_printable() {
        assert_eq!(printable(Key::Backspace, false), None);
        assert_eq!(printable(Key::Left, true), None);
        assert_eq!(printable(Key::Shift, false), None);
    }
}
