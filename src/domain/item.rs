//! Menu content model.
//!
//! The menu of a combo box holds more than candidate values: after a failed
//! search it shows a disabled notice and a row that re-issues the failed query.
//! [`MenuItem`] captures those cases as plain data so the reducer stays pure and
//! hosts decide how each row looks.

use std::fmt;

/// Values a combo box can hold and offer as menu candidates.
///
/// Blanket-implemented for every type meeting the bounds.
pub trait ComboValue: Clone + PartialEq + fmt::Debug + 'static {}

impl<T> ComboValue for T where T: Clone + PartialEq + fmt::Debug + 'static {}

/// Informational rows that cannot be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The last search failed.
    ///
    /// `reason` is the fetcher's error message, kept for diagnostics. The text
    /// shown to the user comes from [`crate::Config::failure_message`].
    RequestFailed {
        /// Error message reported by the fetcher.
        reason: String,
    },
}

/// A single row of menu content.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem<T> {
    /// A candidate value returned by the item fetcher.
    Value(T),

    /// A disabled informational row.
    Notice(Notice),

    /// An actionable row that repeats a failed search.
    Retry {
        /// Query of the failed search.
        query: String,
    },
}

impl<T> MenuItem<T> {
    /// Returns the candidate value if this row holds one.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Notice(_) | Self::Retry { .. } => None,
        }
    }

    /// Whether the row reacts to activation.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Notice(_))
    }
}

/// Wraps fetched candidates into menu rows.
pub fn from_values<T>(values: Vec<T>) -> Vec<MenuItem<T>> {
    values.into_iter().map(MenuItem::Value).collect()
}

/// Builds the menu shown after a failed search for `query`.
pub fn failure_menu<T>(query: String, reason: String) -> Vec<MenuItem<T>> {
    vec![
        MenuItem::Notice(Notice::RequestFailed { reason }),
        MenuItem::Retry { query },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_menu_has_disabled_notice_then_retry() {
        let menu: Vec<MenuItem<String>> = failure_menu("abc".into(), "timeout".into());
        assert_eq!(menu.len(), 2);
        assert!(!menu[0].is_enabled());
        assert_eq!(menu[1], MenuItem::Retry { query: "abc".into() });
        assert!(menu[1].is_enabled());
    }

    #[test]
    fn only_value_rows_expose_values() {
        let rows = from_values(vec![1, 2]);
        assert_eq!(rows[1].value(), Some(&2));
        assert_eq!(MenuItem::<i32>::Retry { query: String::new() }.value(), None);
    }
}
