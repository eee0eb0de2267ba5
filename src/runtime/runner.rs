//! Effect runner interpreting [`Effect`] descriptors.
//!
//! Effects run after their cycle's state commit, in the order the reducer
//! produced them. Props callbacks and host methods are invoked without any
//! borrow of the instance held, so they are free to dispatch; such actions are
//! queued by the dispatch loop.
//!
//! The search effect is the only asynchronous one. It spawns a local task that
//! awaits the fetcher and re-enters the engine with `ReceiveItems` or
//! `RequestFailure`, provided the instance still exists and no newer search
//! has started since.

use super::dispatcher::Inner;
use crate::app::{Action, Effect, InputResolution};
use crate::domain::{ComboValue, MenuItem};
use std::rc::Rc;

/// Executes one effect against the live instance.
pub(crate) fn run<T: ComboValue>(inner: &Rc<Inner<T>>, effect: Effect<T>) {
    tracing::trace!(effect = ?effect, "running effect");

    match effect {
        Effect::Search { query } => search(inner, query),
        Effect::DebouncedSearch => {
            let weak = Rc::downgrade(inner);
            inner.debounce.schedule(async move {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let query = inner.state.borrow().text_value.clone();
                tracing::debug!(query = %query, "debounced search fired");
                search(&inner, query);
            });
        }
        Effect::Blur => {
            if inner.debounce.cancel() {
                tracing::debug!("pending search cancelled on blur");
            }
            if let Some(on_blur) = inner.props().on_blur.clone() {
                on_blur();
            }
        }
        Effect::CancelSearch => {
            let pending = inner.debounce.cancel();
            inner.sequencer.invalidate();
            tracing::debug!(pending, "searches cancelled");
        }
        Effect::Focus => {
            if let Some(on_focus) = inner.props().on_focus.clone() {
                on_focus();
            }
        }
        Effect::Change { value } => {
            if let Some(on_change) = inner.props().on_change.clone() {
                on_change(&value);
            }
        }
        Effect::UnexpectedInput { text, items } => unexpected_input(inner, &text, items),
        Effect::InputChange => {
            let Some(on_input_change) = inner.props().on_input_change.clone() else {
                return;
            };
            let text = inner.state.borrow().text_value.clone();
            if let Some(replacement) = on_input_change(&text) {
                if replacement != text {
                    tracing::debug!(from = %text, to = %replacement, "input rewritten by callback");
                    inner.dispatch(Action::TextChange { value: replacement });
                }
            }
        }
        Effect::InputFocus => {
            if let Some(host) = inner.host() {
                host.focus_input();
            }
        }
        Effect::HighlightMenuItem => highlight_menu_item(inner),
        Effect::SelectMenuItem => {
            if let Some(host) = inner.host() {
                host.select_highlighted();
            }
        }
        Effect::MoveMenuHighlight { step } => {
            if let Some(host) = inner.host() {
                host.move_highlight(step);
            }
        }
        Effect::Reflow => {
            if let Some(host) = inner.host() {
                host.notify_layout();
            }
        }
        Effect::SelectInputText => {
            if let Some(host) = inner.host() {
                host.select_input_text();
            }
        }
    }
}

/// Starts a sequenced fetch for `query`.
fn search<T: ComboValue>(inner: &Rc<Inner<T>>, query: String) {
    if !inner.is_mounted() {
        return;
    }

    inner.dispatch(Action::RequestItems);
    let generation = inner.sequencer.begin();
    let pending = (inner.props().fetch_items)(query.clone());

    tracing::debug!(query = %query, generation = generation.get(), "search started");

    let weak = Rc::downgrade(inner);
    tokio::task::spawn_local(async move {
        let outcome = pending.await;

        let Some(inner) = weak.upgrade() else {
            return;
        };
        if !inner.sequencer.is_current(generation) {
            tracing::trace!(
                query = %query,
                generation = generation.get(),
                "stale search result dropped"
            );
            return;
        }

        match outcome {
            Ok(items) => {
                tracing::debug!(
                    query = %query,
                    generation = generation.get(),
                    item_count = items.len(),
                    "search finished"
                );
                inner.dispatch(Action::ReceiveItems { items });
            }
            Err(error) => {
                tracing::debug!(query = %query, error = %error, "search failed");
                inner.dispatch(Action::RequestFailure {
                    query,
                    reason: error.to_string(),
                });
            }
        }
    });
}

/// Resolves text that was typed but never selected.
#[allow(deprecated)]
fn unexpected_input<T: ComboValue>(
    inner: &Rc<Inner<T>>,
    text: &str,
    items: Option<Vec<MenuItem<T>>>,
) {
    let props = inner.props();

    if let Some(items) = items {
        if let [MenuItem::Value(single)] = items.as_slice() {
            if (props.render_item)(single) == text {
                tracing::debug!(text = %text, "single matching item selected implicitly");
                inner.dispatch(Action::ValueChange {
                    value: single.clone(),
                    keep_focus: false,
                });
            }
        }
    }

    let Some(resolver) = props.on_unexpected_input.clone() else {
        return;
    };

    match resolver(text) {
        InputResolution::Unchanged => {}
        InputResolution::Clear => {
            tracing::warn!(
                "[ComboBox] Returning `InputResolution::Clear` from `on_unexpected_input` is deprecated. \
                 To clear the value use `ComboBox::reset`"
            );
            inner.dispatch(Action::TextClear {
                value: String::new(),
            });
        }
        InputResolution::Value(value) => {
            inner.dispatch(Action::ValueChange {
                value,
                keep_focus: false,
            });
        }
    }
}

/// Highlights the row holding the current value, or the first enabled row.
fn highlight_menu_item<T: ComboValue>(inner: &Rc<Inner<T>>) {
    let Some(host) = inner.host() else {
        return;
    };

    let props = inner.props();
    let index = {
        let state = inner.state.borrow();
        if !state.focused {
            return;
        }
        props.value.as_ref().and_then(|value| {
            state
                .items
                .as_ref()
                .and_then(|items| items.iter().position(|item| item.value() == Some(value)))
        })
    };

    host.highlight_item(index);
    if index.is_some() {
        host.scroll_to_highlighted();
    } else {
        host.move_highlight(1);
    }
}
