//! Terminal input translated into element-targeted events.

use crossterm::event::{KeyCode, KeyModifiers, MouseButton as TermButton};

/// An input event after focus and hit testing resolved its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Delivered to the focused element, or untargeted when nothing has focus.
    Key {
        target: Option<String>,
        key: Key,
        modifiers: Modifiers,
    },
    /// Delivered to the deepest clickable element under the pointer.
    Click {
        target: Option<String>,
        x: u16,
        y: u16,
        button: MouseButton,
    },
    Focus { target: String },
    Blur { target: String },
    Resize { width: u16, height: u16 },
}

impl Event {
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Key { target, .. } | Event::Click { target, .. } => target.as_deref(),
            Event::Focus { target } | Event::Blur { target } => Some(target),
            Event::Resize { .. } => None,
        }
    }

    /// True for Enter or Space without modifiers, and for a left click.
    pub fn is_activation(&self) -> bool {
        match self {
            Event::Key { key, modifiers, .. } => {
                modifiers.is_empty() && matches!(key, Key::Enter | Key::Char(' '))
            }
            Event::Click { button, .. } => *button == MouseButton::Left,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    F(u8),
    /// Anything the widgets have no binding for.
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Self::NONE
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Self::NONE
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<TermButton> for MouseButton {
    fn from(button: TermButton) -> Self {
        match button {
            TermButton::Left => MouseButton::Left,
            TermButton::Right => MouseButton::Right,
            TermButton::Middle => MouseButton::Middle,
        }
    }
}
