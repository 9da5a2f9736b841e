//! Core key types: Keystroke, Modifiers, KeyCode

use std::fmt;

/// Modifier keys held during a keystroke, stored as a bitfield
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(1);
    pub const SHIFT: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    /// Cmd on macOS, Win elsewhere
    pub const META: Modifiers = Modifiers(1 << 3);

    /// Modifiers that turn a character key into a chord instead of input
    const CHORD: Modifiers = Modifiers(Self::CTRL.0 | Self::ALT.0 | Self::META.0);

    pub const fn ctrl(self) -> bool {
        self.intersects(Self::CTRL)
    }

    pub const fn shift(self) -> bool {
        self.intersects(Self::SHIFT)
    }

    pub const fn alt(self) -> bool {
        self.intersects(Self::ALT)
    }

    pub const fn meta(self) -> bool {
        self.intersects(Self::META)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when any modifier of `other` is held
    pub const fn intersects(self, other: Modifiers) -> bool {
        self.0 & other.0 != 0
    }

    /// True when every modifier of `other` is held.
    ///
    /// An empty `other` never matches, so a "no modifier" reorder key
    /// cannot swallow plain arrows.
    pub const fn contains(self, other: Modifiers) -> bool {
        other.0 != 0 && (self.0 & other.0) == other.0
    }

    /// The platform "command" modifier: Meta on macOS, Ctrl elsewhere
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }

    /// Whether a character key pressed with these modifiers is a chord
    pub const fn is_chord(self) -> bool {
        self.intersects(Self::CHORD)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meta = if cfg!(target_os = "macos") {
            "Cmd"
        } else {
            "Win"
        };
        let names = [
            (Self::CTRL, "Ctrl"),
            (Self::SHIFT, "Shift"),
            (Self::ALT, "Alt"),
            (Self::META, meta),
        ];
        let held: Vec<&str> = names
            .iter()
            .filter(|(m, _)| self.intersects(*m))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&held.join("+"))
    }
}

/// A key code as seen by an editable row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character, case preserved
    Char(char),

    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    Up,
    Down,
    Left,
    Right,

    Home,
    End,
}

impl KeyCode {
    /// Vertical arrows do not count as intentional caret placement
    pub const fn is_vertical_arrow(self) -> bool {
        matches!(self, KeyCode::Up | KeyCode::Down)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
        }
    }
}

/// A single keystroke: a key with modifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create an unmodified keystroke for a typed character.
    /// A typed `' '` is normalized to [`KeyCode::Space`].
    pub fn char(c: char) -> Self {
        let key = if c == ' ' {
            KeyCode::Space
        } else {
            KeyCode::Char(c)
        };
        Self::key(key)
    }

    /// The character this keystroke inserts under default editing, if any
    pub fn printable(&self) -> Option<char> {
        if self.mods.is_chord() {
            return None;
        }
        match self.key {
            KeyCode::Char(c) => Some(c),
            KeyCode::Space => Some(' '),
            _ => None,
        }
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            return write!(f, "{}", self.key);
        }
        write!(f, "{}+{}", self.mods, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_modifiers() {
        assert!(Modifiers::NONE.is_empty());
        assert!(!Modifiers::NONE.is_chord());
        assert!(!Modifiers::default().ctrl());
    }

    #[test]
    fn test_contains_requires_every_flag() {
        let held = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(held.contains(Modifiers::CTRL));
        assert!(held.contains(Modifiers::CTRL | Modifiers::SHIFT));
        assert!(!held.contains(Modifiers::CTRL | Modifiers::ALT));
        assert!(held.intersects(Modifiers::CTRL | Modifiers::ALT));
    }

    #[test]
    fn test_contains_empty_never_matches() {
        assert!(!Modifiers::CTRL.contains(Modifiers::NONE));
        assert!(!Modifiers::NONE.contains(Modifiers::NONE));
    }

    #[test]
    fn test_keystroke_display() {
        let stroke = Keystroke::new(KeyCode::Up, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(stroke.to_string(), "Ctrl+Shift+Up");
        assert_eq!(Keystroke::key(KeyCode::Enter).to_string(), "Enter");
    }

    #[test]
    fn test_char_keeps_case_and_normalizes_space() {
        assert_eq!(Keystroke::char('A').key, KeyCode::Char('A'));
        assert_eq!(Keystroke::char(' ').key, KeyCode::Space);
    }

    #[test]
    fn test_printable() {
        assert_eq!(Keystroke::char('x').printable(), Some('x'));
        assert_eq!(Keystroke::key(KeyCode::Space).printable(), Some(' '));
        assert_eq!(Keystroke::key(KeyCode::Enter).printable(), None);
        let ctrl_x = Keystroke::new(KeyCode::Char('x'), Modifiers::CTRL);
        assert_eq!(ctrl_x.printable(), None);
        let shift_x = Keystroke::new(KeyCode::Char('X'), Modifiers::SHIFT);
        assert_eq!(shift_x.printable(), Some('X'));
    }
}
