//! Actions describing what happened to a combo box.
//!
//! Actions are produced by hosts (focus, blur, key presses, clicks, text edits),
//! by the instance API (`reset`, `search`, prop updates) and by the runtime itself
//! when an asynchronous search finishes. Each variant carries only the data its
//! transition needs. The reducer consumes every action exactly once.
//!
//! # Example
//!
//! ```rust
//! use combobox_engine::app::{Action, Key};
//!
//! let actions: Vec<Action<String>> = vec![
//!     Action::Focus,
//!     Action::TextChange { value: "Len".to_string() },
//!     Action::KeyPress { key: Key::ArrowDown },
//! ];
//! # assert_eq!(actions.len(), 3);
//! ```

use super::keys::Key;

/// Discrete events driving combo-box state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    /// Resets state and seeds the text from the current value.
    Mount,

    /// Props were replaced; carries the value held before the update.
    PropsChanged {
        /// Value of the previous props.
        prev_value: Option<T>,
    },

    /// The input received focus.
    Focus,

    /// The input lost focus.
    Blur,

    /// The user edited the input text.
    TextChange {
        /// New input text.
        value: String,
    },

    /// Replaces the text without treating it as a user edit.
    TextClear {
        /// Replacement text.
        value: String,
    },

    /// A value was chosen.
    ValueChange {
        /// Chosen value.
        value: T,
        /// Stay in editing mode and refocus the input.
        keep_focus: bool,
    },

    /// A key was pressed in the input.
    KeyPress {
        /// Key descriptor.
        key: Key,
    },

    /// The input was clicked.
    InputClick,

    /// A search request started.
    RequestItems,

    /// A search request completed with candidates.
    ReceiveItems {
        /// Candidates returned by the fetcher.
        items: Vec<T>,
    },

    /// A search request failed.
    RequestFailure {
        /// Query of the failed request, re-issued by the retry row.
        query: String,
        /// Error message returned by the fetcher.
        reason: String,
    },

    /// Returns to the default state.
    Reset,

    /// Starts a search for `query`.
    Search {
        /// Query to search for.
        query: String,
    },

    /// Opens the menu without searching.
    Open,

    /// Closes the menu and drops its content.
    Close,
}

impl<T> Action<T> {
    /// Short name of the action kind, used as a tracing field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Mount => "Mount",
            Self::PropsChanged { .. } => "PropsChanged",
            Self::Focus => "Focus",
            Self::Blur => "Blur",
            Self::TextChange { .. } => "TextChange",
            Self::TextClear { .. } => "TextClear",
            Self::ValueChange { .. } => "ValueChange",
            Self::KeyPress { .. } => "KeyPress",
            Self::InputClick => "InputClick",
            Self::RequestItems => "RequestItems",
            Self::ReceiveItems { .. } => "ReceiveItems",
            Self::RequestFailure { .. } => "RequestFailure",
            Self::Reset => "Reset",
            Self::Search { .. } => "Search",
            Self::Open => "Open",
            Self::Close => "Close",
        }
    }
}
