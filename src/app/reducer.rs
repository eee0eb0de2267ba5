//! Action handling and state transition logic.
//!
//! This module implements the reducer that turns an [`Action`] into a state patch
//! and the list of effects to run once that patch is committed. It is the
//! primary control flow coordinator of a combo box and performs no I/O: every
//! side effect is described by an [`Effect`] and carried out by the runtime.
//!
//! # Architecture
//!
//! 1. The dispatch loop hands the current state, props and one action to [`reduce`]
//! 2. [`reduce`] pattern-matches the action
//! 3. The returned [`StatePatch`] is merged into the live state
//! 4. The returned effects run in order
//!
//! # Example
//!
//! ```rust
//! use combobox_engine::app::{reduce, Action, ComboBoxState, Effect, Props};
//! use futures_util::FutureExt;
//!
//! let props = Props::new(
//!     |_query: String| async { Ok(Vec::<String>::new()) }.boxed_local(),
//!     String::clone,
//! );
//! let state = ComboBoxState::default();
//!
//! let (patch, effects) = reduce(&state, &props, Action::Focus);
//! assert_eq!(patch.editing, Some(true));
//! assert_eq!(effects[0], Effect::Search { query: String::new() });
//! ```

use super::{Action, ComboBoxState, Effect, Key, Props, StatePatch};
use crate::domain::item::{failure_menu, from_values};
use crate::domain::ComboValue;

/// Computes the transition for `action`.
///
/// # Returns
///
/// The partial state to merge and the effects to run afterwards, in order.
/// Both may be empty.
#[allow(clippy::too_many_lines)]
pub fn reduce<T: ComboValue>(
    state: &ComboBoxState<T>,
    props: &Props<T>,
    action: Action<T>,
) -> (StatePatch<T>, Vec<Effect<T>>) {
    let _span = tracing::debug_span!("reduce", action = action.kind()).entered();

    match action {
        Action::Mount => {
            let patch = StatePatch::from(ComboBoxState::default())
                .text_value(props.format_value(props.value.as_ref()));
            (patch, vec![])
        }
        Action::PropsChanged { prev_value } => {
            if props.value == prev_value {
                return (StatePatch::new(), vec![]);
            }

            tracing::debug!(editing = state.editing, "value replaced by props");

            let text_value = if state.editing {
                state.text_value.clone()
            } else {
                props.format_value(props.value.as_ref())
            };

            let patch = StatePatch::new()
                .opened(false)
                .loading(false)
                .text_value(text_value);
            (patch, vec![])
        }
        Action::Focus => {
            if state.editing {
                return (
                    StatePatch::new().focused(true).opened(true),
                    vec![
                        Effect::Search {
                            query: state.text_value.clone(),
                        },
                        Effect::Focus,
                    ],
                );
            }

            (
                StatePatch::new().focused(true).opened(true).editing(true),
                vec![
                    Effect::Search {
                        query: String::new(),
                    },
                    Effect::Focus,
                    Effect::SelectInputText,
                ],
            )
        }
        Action::Blur => {
            let patch = StatePatch::new()
                .opened(false)
                .items(None)
                .focused(false)
                .editing(false);

            if !state.input_changed {
                return (patch, vec![Effect::Blur]);
            }

            tracing::debug!(text = %state.text_value, "blur with unresolved input");

            (
                patch,
                vec![
                    Effect::Blur,
                    Effect::UnexpectedInput {
                        text: state.text_value.clone(),
                        items: state.items.clone(),
                    },
                ],
            )
        }
        Action::TextChange { value } => (
            StatePatch::new().input_changed(true).text_value(value),
            vec![Effect::DebouncedSearch, Effect::InputChange],
        ),
        Action::TextClear { value } => (StatePatch::new().text_value(value), vec![]),
        Action::ValueChange { value, keep_focus } => {
            let text_value = props.format_value(Some(&value));
            let patch = StatePatch::new()
                .opened(false)
                .input_changed(false)
                .text_value(text_value);

            if keep_focus {
                return (
                    patch.editing(true).items(None),
                    vec![Effect::Change { value }, Effect::InputFocus],
                );
            }

            (patch.editing(false), vec![Effect::Change { value }])
        }
        Action::KeyPress { key } => match key {
            Key::Enter => (StatePatch::new(), vec![Effect::SelectMenuItem]),
            Key::ArrowUp | Key::ArrowDown => {
                let step = key.highlight_step().unwrap_or_default();
                let mut effects = vec![Effect::MoveMenuHighlight { step }];
                if !state.opened {
                    effects.push(Effect::Search {
                        query: state.text_value.clone(),
                    });
                }
                (StatePatch::new().opened(true), effects)
            }
            Key::Escape => (StatePatch::new().items(None).opened(false), vec![]),
            Key::Other => (StatePatch::new(), vec![]),
        },
        Action::InputClick => {
            if state.opened {
                return (StatePatch::new(), vec![]);
            }
            (
                StatePatch::new().opened(true),
                vec![Effect::Search {
                    query: state.text_value.clone(),
                }],
            )
        }
        Action::RequestItems => (StatePatch::new().loading(true).opened(true), vec![]),
        Action::ReceiveItems { items } => {
            tracing::debug!(item_count = items.len(), "items received");
            (
                StatePatch::new().loading(false).items(Some(from_values(items))),
                vec![Effect::HighlightMenuItem, Effect::Reflow],
            )
        }
        Action::RequestFailure { query, reason } => {
            tracing::debug!(query = %query, reason = %reason, "search failed");
            (
                StatePatch::new()
                    .loading(false)
                    .items(Some(failure_menu(query, reason))),
                vec![Effect::HighlightMenuItem],
            )
        }
        Action::Reset => (
            StatePatch::from(ComboBoxState::default()),
            vec![Effect::CancelSearch],
        ),
        Action::Search { query } => (StatePatch::new(), vec![Effect::Search { query }]),
        Action::Open => (StatePatch::new().opened(true), vec![]),
        Action::Close => (StatePatch::new().opened(false).items(None), vec![]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MenuItem, Notice};
    use futures_util::FutureExt;

    fn props(value: Option<&str>) -> Props<String> {
        Props::new(
            |_query: String| async { Ok(Vec::new()) }.boxed_local(),
            |value: &String| value.to_uppercase(),
        )
        .with_value(value.map(String::from))
    }

    fn step(
        state: &mut ComboBoxState<String>,
        props: &Props<String>,
        action: Action<String>,
    ) -> Vec<Effect<String>> {
        let (patch, effects) = reduce(state, props, action);
        state.apply(patch);
        effects
    }

    fn busy_state() -> ComboBoxState<String> {
        ComboBoxState {
            text_value: "typed".into(),
            items: Some(vec![MenuItem::Value("a".into())]),
            opened: true,
            focused: true,
            editing: true,
            loading: true,
            input_changed: true,
        }
    }

    #[test]
    fn mount_without_value_has_empty_text() {
        let mut state = busy_state();
        let effects = step(&mut state, &props(None), Action::Mount);
        assert!(effects.is_empty());
        assert_eq!(state, ComboBoxState::default());
    }

    #[test]
    fn mount_formats_current_value() {
        let mut state = ComboBoxState::default();
        step(&mut state, &props(Some("oslo")), Action::Mount);
        assert_eq!(state.text_value, "OSLO");
    }

    #[test]
    fn focus_while_not_editing_searches_everything() {
        let mut state = ComboBoxState::default();
        state.text_value = "OSLO".into();
        let effects = step(&mut state, &props(Some("oslo")), Action::Focus);

        assert!(state.opened && state.focused && state.editing);
        assert_eq!(
            effects,
            vec![
                Effect::Search { query: String::new() },
                Effect::Focus,
                Effect::SelectInputText,
            ]
        );
    }

    #[test]
    fn focus_while_editing_searches_current_text() {
        let mut state = ComboBoxState {
            text_value: "os".into(),
            editing: true,
            ..ComboBoxState::default()
        };
        let effects = step(&mut state, &props(None), Action::Focus);
        assert_eq!(
            effects,
            vec![Effect::Search { query: "os".into() }, Effect::Focus]
        );
        assert!(state.focused && state.opened);
    }

    #[test]
    fn blur_without_edits_only_notifies() {
        let mut state = busy_state();
        state.input_changed = false;
        let effects = step(&mut state, &props(None), Action::Blur);

        assert_eq!(effects, vec![Effect::Blur]);
        assert!(!state.opened && !state.focused && !state.editing);
        assert_eq!(state.items, None);
    }

    #[test]
    fn blur_after_edits_captures_text_and_items() {
        let mut state = busy_state();
        let effects = step(&mut state, &props(None), Action::Blur);

        assert_eq!(
            effects,
            vec![
                Effect::Blur,
                Effect::UnexpectedInput {
                    text: "typed".into(),
                    items: Some(vec![MenuItem::Value("a".into())]),
                },
            ]
        );
        assert_eq!(state.items, None);
        assert!(!state.editing, "editing never outlives focus");
    }

    #[test]
    fn text_change_debounces_search() {
        let mut state = ComboBoxState::default();
        let effects = step(
            &mut state,
            &props(None),
            Action::TextChange { value: "ab".into() },
        );
        assert_eq!(effects, vec![Effect::DebouncedSearch, Effect::InputChange]);
        assert!(state.input_changed);
        assert_eq!(state.text_value, "ab");
    }

    #[test]
    fn text_clear_is_not_a_user_edit() {
        let mut state = ComboBoxState::default();
        step(&mut state, &props(None), Action::TextClear { value: String::new() });
        assert!(!state.input_changed);
    }

    #[test]
    fn value_change_displays_formatted_value() {
        let mut state = busy_state();
        let effects = step(
            &mut state,
            &props(None),
            Action::ValueChange {
                value: "rome".into(),
                keep_focus: false,
            },
        );

        assert_eq!(state.text_value, "ROME");
        assert!(!state.opened && !state.editing && !state.input_changed);
        assert_eq!(effects, vec![Effect::Change { value: "rome".into() }]);
    }

    #[test]
    fn value_change_keeping_focus_stays_editing() {
        let mut state = busy_state();
        let effects = step(
            &mut state,
            &props(None),
            Action::ValueChange {
                value: "rome".into(),
                keep_focus: true,
            },
        );

        assert!(state.editing);
        assert_eq!(state.items, None);
        assert_eq!(
            effects,
            vec![Effect::Change { value: "rome".into() }, Effect::InputFocus]
        );
    }

    #[test]
    fn arrow_on_closed_menu_opens_and_searches() {
        let mut state = ComboBoxState {
            text_value: "ro".into(),
            ..ComboBoxState::default()
        };
        let effects = step(
            &mut state,
            &props(None),
            Action::KeyPress { key: Key::ArrowUp },
        );
        assert!(state.opened);
        assert_eq!(
            effects,
            vec![
                Effect::MoveMenuHighlight { step: -1 },
                Effect::Search { query: "ro".into() },
            ]
        );
    }

    #[test]
    fn arrow_on_open_menu_only_moves() {
        let mut state = busy_state();
        let effects = step(
            &mut state,
            &props(None),
            Action::KeyPress { key: Key::ArrowDown },
        );
        assert_eq!(effects, vec![Effect::MoveMenuHighlight { step: 1 }]);
    }

    #[test]
    fn enter_selects_and_escape_closes() {
        let mut state = busy_state();
        let effects = step(&mut state, &props(None), Action::KeyPress { key: Key::Enter });
        assert_eq!(effects, vec![Effect::SelectMenuItem]);
        assert_eq!(state, busy_state());

        let effects = step(&mut state, &props(None), Action::KeyPress { key: Key::Escape });
        assert!(effects.is_empty());
        assert!(!state.opened);
        assert_eq!(state.items, None);
    }

    #[test]
    fn input_click_searches_only_when_closed() {
        let mut state = ComboBoxState::default();
        let effects = step(&mut state, &props(None), Action::InputClick);
        assert_eq!(effects, vec![Effect::Search { query: String::new() }]);
        assert!(state.opened);

        let effects = step(&mut state, &props(None), Action::InputClick);
        assert!(effects.is_empty());
    }

    #[test]
    fn request_lifecycle_toggles_loading() {
        let mut state = ComboBoxState::default();
        step(&mut state, &props(None), Action::RequestItems);
        assert!(state.loading && state.opened);

        let effects = step(
            &mut state,
            &props(None),
            Action::ReceiveItems {
                items: vec!["x".into()],
            },
        );
        assert!(!state.loading);
        assert_eq!(state.items, Some(vec![MenuItem::Value("x".into())]));
        assert_eq!(effects, vec![Effect::HighlightMenuItem, Effect::Reflow]);
    }

    #[test]
    fn failure_shows_notice_and_retry() {
        let mut state = ComboBoxState::default();
        step(&mut state, &props(None), Action::RequestItems);
        let effects = step(
            &mut state,
            &props(None),
            Action::RequestFailure {
                query: "ro".into(),
                reason: "offline".into(),
            },
        );

        assert_eq!(effects, vec![Effect::HighlightMenuItem]);
        assert_eq!(
            state.items,
            Some(vec![
                MenuItem::Notice(Notice::RequestFailed {
                    reason: "offline".into()
                }),
                MenuItem::Retry { query: "ro".into() },
            ])
        );
    }

    #[test]
    fn reset_always_yields_default() {
        for mut state in [busy_state(), ComboBoxState::default()] {
            let effects = step(&mut state, &props(Some("x")), Action::Reset);
            assert_eq!(effects, vec![Effect::CancelSearch]);
            assert_eq!(state, ComboBoxState::default());
        }
    }

    #[test]
    fn props_change_with_same_value_is_ignored() {
        let mut state = busy_state();
        let effects = step(
            &mut state,
            &props(Some("a")),
            Action::PropsChanged {
                prev_value: Some("a".into()),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state, busy_state());
    }

    #[test]
    fn props_change_keeps_text_while_editing() {
        let mut state = busy_state();
        step(
            &mut state,
            &props(Some("b")),
            Action::PropsChanged { prev_value: None },
        );
        assert_eq!(state.text_value, "typed");
        assert!(!state.opened && !state.loading);

        state.editing = false;
        step(
            &mut state,
            &props(Some("c")),
            Action::PropsChanged {
                prev_value: Some("b".into()),
            },
        );
        assert_eq!(state.text_value, "C");
    }

    #[test]
    fn search_action_only_emits_effect() {
        let mut state = busy_state();
        let effects = step(
            &mut state,
            &props(None),
            Action::Search { query: "q".into() },
        );
        assert_eq!(effects, vec![Effect::Search { query: "q".into() }]);
        assert_eq!(state, busy_state());
    }

    #[test]
    fn open_and_close() {
        let mut state = busy_state();
        step(&mut state, &props(None), Action::Close);
        assert!(!state.opened);
        assert_eq!(state.items, None);
        step(&mut state, &props(None), Action::Open);
        assert!(state.opened);
    }
}
