//! Keyboard input understood by the combo box.
//!
//! Hosts translate their platform key events into [`Key`] before dispatching
//! [`Action::KeyPress`](crate::app::Action::KeyPress). Only a handful of keys
//! drive the menu; everything else is typed text and reaches the engine through
//! text-change actions instead.
//!
//! # Example
//!
//! ```rust
//! use combobox_engine::app::Key;
//!
//! let key = Key::from_name("ArrowDown");
//! assert_eq!(key, Key::ArrowDown);
//! assert!(key.prevents_default());
//! ```

/// Key press descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Selects the highlighted menu item.
    Enter,

    /// Moves the highlight up, opening the menu if needed.
    ArrowUp,

    /// Moves the highlight down, opening the menu if needed.
    ArrowDown,

    /// Closes the menu and drops its content.
    Escape,

    /// Any key without menu semantics.
    Other,
}

impl Key {
    /// Maps a DOM-style key name (`KeyboardEvent.key`) to a [`Key`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }

    /// Whether the host should suppress the platform default for this key.
    ///
    /// Enter would submit a surrounding form and the arrows would move the
    /// caret; the engine consumes both.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::Enter | Self::ArrowUp | Self::ArrowDown)
    }

    /// Highlight step for arrow keys.
    #[must_use]
    pub const fn highlight_step(self) -> Option<isize> {
        match self {
            Self::ArrowUp => Some(-1),
            Self::ArrowDown => Some(1),
            Self::Enter | Self::Escape | Self::Other => None,
        }
    }
}
