//! Combo-box state and partial state patches.
//!
//! This module defines [`ComboBoxState`], the single source of truth for one
//! combo-box instance, and [`StatePatch`], the partial state the reducer returns.
//! The dispatch loop is the only writer: it shallow-merges each patch into the
//! live state, field by field.
//!
//! # State Components
//!
//! - **Text**: Current input text
//! - **Items**: Menu content from the last search, `None` until one completes
//! - **Flags**: `opened`, `focused`, `editing`, `loading`, `input_changed`
//!
//! # Example
//!
//! ```rust
//! use combobox_engine::app::{ComboBoxState, StatePatch};
//!
//! let mut state = ComboBoxState::<String>::default();
//! state.apply(StatePatch::new().opened(true).text_value("abc"));
//! assert!(state.opened);
//! assert_eq!(state.text_value, "abc");
//! assert!(!state.focused);
//! ```

use crate::domain::MenuItem;

/// Complete state of one combo-box instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboBoxState<T> {
    /// Current input text.
    pub text_value: String,

    /// Menu content; `None` means nothing has been computed.
    pub items: Option<Vec<MenuItem<T>>>,

    /// The menu is shown.
    pub opened: bool,

    /// The input has focus.
    pub focused: bool,

    /// The user is editing; the text is not derived from the value.
    pub editing: bool,

    /// A search is in flight.
    pub loading: bool,

    /// The text was modified by the user since the last value change.
    pub input_changed: bool,
}

impl<T> Default for ComboBoxState<T> {
    fn default() -> Self {
        Self {
            text_value: String::new(),
            items: None,
            opened: false,
            focused: false,
            editing: false,
            loading: false,
            input_changed: false,
        }
    }
}

impl<T> ComboBoxState<T> {
    /// Merges a patch, overwriting only the fields it sets.
    pub fn apply(&mut self, patch: StatePatch<T>) {
        let StatePatch {
            text_value,
            items,
            opened,
            focused,
            editing,
            loading,
            input_changed,
        } = patch;

        if let Some(text_value) = text_value {
            self.text_value = text_value;
        }
        if let Some(items) = items {
            self.items = items;
        }
        if let Some(opened) = opened {
            self.opened = opened;
        }
        if let Some(focused) = focused {
            self.focused = focused;
        }
        if let Some(editing) = editing {
            self.editing = editing;
        }
        if let Some(loading) = loading {
            self.loading = loading;
        }
        if let Some(input_changed) = input_changed {
            self.input_changed = input_changed;
        }
    }

    /// Candidate values currently in the menu, skipping notice and retry rows.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter().flatten().filter_map(MenuItem::value)
    }
}

/// Partial state produced by the reducer.
///
/// `items` is doubly optional: the outer `Option` says whether the patch
/// touches the field, the inner one is the new value.
#[derive(Debug, Clone, PartialEq)]
pub struct StatePatch<T> {
    /// New input text.
    pub text_value: Option<String>,

    /// New menu content; `Some(None)` clears it.
    pub items: Option<Option<Vec<MenuItem<T>>>>,

    /// Whether the menu is shown.
    pub opened: Option<bool>,

    /// Whether the input has focus.
    pub focused: Option<bool>,

    /// Whether the user is editing.
    pub editing: Option<bool>,

    /// Whether a search is in flight.
    pub loading: Option<bool>,

    /// Whether the text was modified by the user.
    pub input_changed: Option<bool>,
}

impl<T> Default for StatePatch<T> {
    fn default() -> Self {
        Self {
            text_value: None,
            items: None,
            opened: None,
            focused: None,
            editing: None,
            loading: None,
            input_changed: None,
        }
    }
}

impl<T> StatePatch<T> {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the patch sets no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text_value.is_none()
            && self.items.is_none()
            && self.opened.is_none()
            && self.focused.is_none()
            && self.editing.is_none()
            && self.loading.is_none()
            && self.input_changed.is_none()
    }

    /// Sets the input text.
    #[must_use]
    pub fn text_value(mut self, text_value: impl Into<String>) -> Self {
        self.text_value = Some(text_value.into());
        self
    }

    /// Sets or clears the menu content.
    #[must_use]
    pub fn items(mut self, items: Option<Vec<MenuItem<T>>>) -> Self {
        self.items = Some(items);
        self
    }

    /// Sets menu visibility.
    #[must_use]
    pub fn opened(mut self, opened: bool) -> Self {
        self.opened = Some(opened);
        self
    }

    /// Sets input focus.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = Some(focused);
        self
    }

    /// Sets the editing flag.
    #[must_use]
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = Some(editing);
        self
    }

    /// Sets the loading flag.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    /// Sets the user-edit flag.
    #[must_use]
    pub fn input_changed(mut self, input_changed: bool) -> Self {
        self.input_changed = Some(input_changed);
        self
    }
}

impl<T> From<ComboBoxState<T>> for StatePatch<T> {
    /// A patch that replaces every field.
    fn from(state: ComboBoxState<T>) -> Self {
        Self {
            text_value: Some(state.text_value),
            items: Some(state.items),
            opened: Some(state.opened),
            focused: Some(state.focused),
            editing: Some(state.editing),
            loading: Some(state.loading),
            input_changed: Some(state.input_changed),
        }
    }
}
