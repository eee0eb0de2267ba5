//! Effects representing side effects to be executed by the runtime.
//!
//! This module defines the [`Effect`] type, the imperative commands produced by
//! the reducer after processing an action. Effects are descriptions only; the
//! effect runner interprets them after the state patch has been committed, in the
//! order the reducer emitted them.
//!
//! # Example
//!
//! ```rust
//! use combobox_engine::app::Effect;
//!
//! let effects: Vec<Effect<String>> = vec![
//!     Effect::Search { query: String::new() },
//!     Effect::Focus,
//!     Effect::SelectInputText,
//! ];
//! # assert_eq!(effects.len(), 3);
//! ```

use crate::domain::MenuItem;

/// Commands executed after a state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<T> {
    /// Fetches items for `query` through the request sequencer.
    Search {
        /// Query passed to the item fetcher.
        query: String,
    },

    /// Schedules a search for the current text on the debounce gate.
    DebouncedSearch,

    /// Cancels the pending debounced search and notifies `on_blur`.
    Blur,

    /// Drops the pending debounced search and supersedes in-flight searches.
    CancelSearch,

    /// Notifies `on_focus`.
    Focus,

    /// Notifies `on_change` with the chosen value.
    Change {
        /// Chosen value.
        value: T,
    },

    /// Resolves text the user typed but never selected.
    ///
    /// Carries the text and the menu content as they were when focus was lost,
    /// since the menu is cleared by the same transition.
    UnexpectedInput {
        /// Input text at blur time.
        text: String,
        /// Menu content at blur time.
        items: Option<Vec<MenuItem<T>>>,
    },

    /// Notifies `on_input_change`, which may rewrite the text.
    InputChange,

    /// Moves host focus back to the input.
    InputFocus,

    /// Highlights the menu row matching the current value.
    HighlightMenuItem,

    /// Activates the highlighted menu row.
    SelectMenuItem,

    /// Moves the menu highlight by `step` rows.
    MoveMenuHighlight {
        /// Signed row offset.
        step: isize,
    },

    /// Tells layout observers that the menu size may have changed.
    Reflow,

    /// Selects the whole input text.
    SelectInputText,
}
