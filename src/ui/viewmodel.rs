//! Menu view model derived from combo-box state.
//!
//! Hosts draw the menu from a [`MenuViewModel`] instead of interpreting raw
//! state. The view model decides which rows exist (spinner, candidates,
//! not-found notice, failure notice, retry action), resolves their labels and
//! pre-computes the character ranges that match the typed text.
//!
//! # Example
//!
//! ```rust
//! use combobox_engine::app::{ComboBoxState, Props};
//! use combobox_engine::domain::MenuItem;
//! use combobox_engine::ui::{MenuRow, MenuViewModel};
//! use combobox_engine::Config;
//! use futures_util::FutureExt;
//!
//! let props = Props::new(
//!     |_query: String| async { Ok(Vec::<String>::new()) }.boxed_local(),
//!     String::clone,
//! );
//! let state = ComboBoxState {
//!     opened: true,
//!     items: Some(vec![MenuItem::Value("Lima".to_string())]),
//!     ..ComboBoxState::default()
//! };
//!
//! let menu = MenuViewModel::compute(&state, &props, &Config::default()).unwrap();
//! assert!(matches!(&menu.rows[0], MenuRow::Item { label, .. } if label == "Lima"));
//! ```

use crate::app::{ComboBoxState, Props};
use crate::domain::{MenuItem, Notice};
use crate::Config;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Rows to draw in an open menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuViewModel {
    /// Rows in display order.
    pub rows: Vec<MenuRow>,

    /// A search is in flight while older rows are shown.
    pub loading: bool,
}

/// One displayable menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuRow {
    /// Placeholder shown while the first results load.
    Spinner,

    /// A candidate value.
    Item {
        /// Index into the state's items, for [`crate::ComboBox::activate`].
        index: usize,
        /// Rendered item text.
        label: String,
        /// `(start, end)` character ranges matching the input text.
        highlight_ranges: Vec<(usize, usize)>,
    },

    /// Disabled informational text.
    Notice {
        /// Text to display.
        text: String,
    },

    /// Action repeating a failed search.
    Retry {
        /// Index into the state's items, for [`crate::ComboBox::activate`].
        index: usize,
        /// Text to display.
        label: String,
    },

    /// The search finished without candidates.
    NotFound {
        /// Text to display.
        text: String,
    },
}

impl MenuRow {
    /// Index to pass to [`crate::ComboBox::activate`], if the row is actionable.
    #[must_use]
    pub const fn activation_index(&self) -> Option<usize> {
        match self {
            Self::Item { index, .. } | Self::Retry { index, .. } => Some(*index),
            Self::Spinner | Self::Notice { .. } | Self::NotFound { .. } => None,
        }
    }
}

impl MenuViewModel {
    /// Computes the menu for `state`, or `None` when nothing should be shown.
    #[must_use]
    pub fn compute<T>(state: &ComboBoxState<T>, props: &Props<T>, config: &Config) -> Option<Self> {
        if !state.opened {
            return None;
        }

        let Some(items) = state.items.as_ref() else {
            return state.loading.then(|| Self {
                rows: vec![MenuRow::Spinner],
                loading: true,
            });
        };

        if items.is_empty() {
            return Some(Self {
                rows: vec![MenuRow::NotFound {
                    text: config.not_found_message.clone(),
                }],
                loading: state.loading,
            });
        }

        let matcher = (state.input_changed && !state.text_value.is_empty())
            .then(SkimMatcherV2::default);

        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                MenuItem::Value(value) => {
                    let label = (props.render_item)(value);
                    let highlight_ranges = matcher.as_ref().map_or_else(Vec::new, |m| {
                        compute_highlight_ranges(&label, &state.text_value, m)
                    });
                    MenuRow::Item {
                        index,
                        label,
                        highlight_ranges,
                    }
                }
                MenuItem::Notice(Notice::RequestFailed { .. }) => MenuRow::Notice {
                    text: config.failure_message.clone(),
                },
                MenuItem::Retry { .. } => MenuRow::Retry {
                    index,
                    label: config.retry_label.clone(),
                },
            })
            .collect();

        Some(Self {
            rows,
            loading: state.loading,
        })
    }

    /// Whether any row can be activated.
    #[must_use]
    pub fn has_actionable_rows(&self) -> bool {
        self.rows.iter().any(|row| row.activation_index().is_some())
    }
}

/// Character index ranges of `text` matched by `query`.
///
/// Consecutive matched indices are coalesced into `(start, end)` ranges with an
/// exclusive end.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;

    fn props() -> Props<String> {
        Props::new(
            |_query: String| async { Ok(Vec::new()) }.boxed_local(),
            String::clone,
        )
        .with_render_item(|city: &String| format!("{city}, PT"))
    }

    fn opened(items: Option<Vec<MenuItem<String>>>) -> ComboBoxState<String> {
        ComboBoxState {
            opened: true,
            items,
            ..ComboBoxState::default()
        }
    }

    #[test]
    fn closed_menu_has_no_view() {
        let state = ComboBoxState::<String>::default();
        assert_eq!(MenuViewModel::compute(&state, &props(), &Config::default()), None);
    }

    #[test]
    fn first_load_shows_spinner() {
        let mut state = opened(None);
        assert_eq!(MenuViewModel::compute(&state, &props(), &Config::default()), None);

        state.loading = true;
        let menu = MenuViewModel::compute(&state, &props(), &Config::default()).unwrap();
        assert_eq!(menu.rows, vec![MenuRow::Spinner]);
        assert!(!menu.has_actionable_rows());
    }

    #[test]
    fn empty_result_shows_not_found() {
        let config = Config {
            not_found_message: "Nothing here".into(),
            ..Config::default()
        };
        let menu = MenuViewModel::compute(&opened(Some(vec![])), &props(), &config).unwrap();
        assert_eq!(
            menu.rows,
            vec![MenuRow::NotFound {
                text: "Nothing here".into()
            }]
        );
    }

    #[test]
    fn failure_rows_use_configured_labels() {
        let state = opened(Some(crate::domain::item::failure_menu(
            "po".into(),
            "offline".into(),
        )));
        let config = Config::default();
        let menu = MenuViewModel::compute(&state, &props(), &config).unwrap();

        assert_eq!(
            menu.rows,
            vec![
                MenuRow::Notice {
                    text: config.failure_message.clone()
                },
                MenuRow::Retry {
                    index: 1,
                    label: config.retry_label.clone()
                },
            ]
        );
    }

    #[test]
    fn items_are_rendered_and_highlighted() {
        let mut state = opened(Some(vec![MenuItem::Value("Porto".into())]));
        state.text_value = "pt".into();
        state.input_changed = true;

        let menu = MenuViewModel::compute(&state, &props(), &Config::default()).unwrap();
        let MenuRow::Item {
            index,
            label,
            highlight_ranges,
        } = &menu.rows[0]
        else {
            panic!("expected an item row");
        };
        assert_eq!(*index, 0);
        assert_eq!(label, "Porto, PT");
        assert!(!highlight_ranges.is_empty());
    }

    #[test]
    fn adjacent_indices_coalesce() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(
            compute_highlight_ranges("moscow", "mos", &matcher),
            vec![(0, 3)]
        );
        assert!(compute_highlight_ranges("moscow", "xyz", &matcher).is_empty());
    }
}
