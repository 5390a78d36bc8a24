//! Page events and handler responses.

use crate::dom::ElementId;

/// A keyboard key, as far as the widgets care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Tab,
    Character(char),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// An event delivered to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// An element gained focus.
    Focus { target: ElementId },
    /// An input's value changed. The new value is already in the document.
    Input { target: ElementId },
    /// A key was pressed while `target` had focus.
    KeyDown { target: ElementId, key: Key },
    /// An element was clicked.
    Click { target: ElementId },
}

impl PageEvent {
    /// The element the event was dispatched to.
    pub fn target(&self) -> ElementId {
        match self {
            Self::Focus { target }
            | Self::Input { target }
            | Self::KeyDown { target, .. }
            | Self::Click { target } => *target,
        }
    }
}

/// What a handler did with an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The event was consumed.
    pub handled: bool,
    /// The browser's default action should be suppressed.
    pub default_prevented: bool,
}

impl EventResponse {
    /// The event was not handled.
    pub const IGNORED: Self = Self {
        handled: false,
        default_prevented: false,
    };

    /// The event was handled; the default action may still run.
    pub const HANDLED: Self = Self {
        handled: true,
        default_prevented: false,
    };

    /// The event was handled and its default action suppressed.
    pub const PREVENT_DEFAULT: Self = Self {
        handled: true,
        default_prevented: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_name("Down"), Key::ArrowDown);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("a"), Key::Character('a'));
        assert_eq!(Key::from_name("é"), Key::Character('é'));
        assert_eq!(Key::from_name("Shift"), Key::Other);
        assert_eq!(Key::from_name(""), Key::Other);
    }
}
