//! Dispatch loop and the combo-box instance handle.
//!
//! [`ComboBox`] owns the live state of one combo box together with its props,
//! host, request sequencer and debounce gate. [`ComboBox::dispatch`] is the only
//! way state changes: it runs the reducer, merges the patch, notifies render
//! subscribers and then runs the effects.
//!
//! # Reentrancy
//!
//! Effects and callbacks may dispatch while a cycle is running. Those actions
//! are queued and processed once the current cycle has committed its state and
//! finished its effects, so the reducer never runs nested.
//!
//! # Runtime Requirements
//!
//! Searches and debounce timers run as `spawn_local` tasks, so the instance
//! must be driven from inside a [`tokio::task::LocalSet`]. Tasks only hold weak
//! references: once every handle is dropped or [`ComboBox::unmount`] is called
//! they complete without touching state.

use super::debounce::DebounceGate;
use super::runner;
use super::sequencer::RequestSequencer;
use crate::app::{reduce, Action, ComboBoxState, Props};
use crate::domain::{ComboValue, MenuItem};
use crate::infrastructure::Host;
use crate::Config;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

type Listener<T> = Rc<dyn Fn(&ComboBoxState<T>)>;

/// Shared instance data behind a [`ComboBox`] handle.
pub(crate) struct Inner<T> {
    pub(crate) state: RefCell<ComboBoxState<T>>,
    pub(crate) props: RefCell<Rc<Props<T>>>,
    pub(crate) host: RefCell<Option<Rc<dyn Host>>>,
    pub(crate) sequencer: RequestSequencer,
    pub(crate) debounce: DebounceGate,
    pub(crate) config: Config,
    queue: RefCell<VecDeque<Action<T>>>,
    dispatching: Cell<bool>,
    mounted: Cell<bool>,
    listeners: RefCell<Vec<Listener<T>>>,
}

impl<T: ComboValue> Inner<T> {
    /// Current props; cloning the `Rc` releases the borrow immediately.
    pub(crate) fn props(&self) -> Rc<Props<T>> {
        Rc::clone(&self.props.borrow())
    }

    /// Current host, or `None` after unmount.
    pub(crate) fn host(&self) -> Option<Rc<dyn Host>> {
        self.host.borrow().clone()
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub(crate) fn dispatch(self: &Rc<Self>, action: Action<T>) {
        if !self.mounted.get() {
            tracing::debug!(action = action.kind(), "dispatch after unmount ignored");
            return;
        }

        self.queue.borrow_mut().push_back(action);
        if self.dispatching.replace(true) {
            return;
        }

        let _cycle = CycleGuard(&self.dispatching);
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(action) = next else {
                break;
            };
            self.process(action);
        }
    }

    fn process(self: &Rc<Self>, action: Action<T>) {
        let _span = tracing::debug_span!("dispatch", action = action.kind()).entered();

        let props = self.props();
        let (patch, effects) = {
            let state = self.state.borrow();
            reduce(&state, &props, action)
        };

        if !patch.is_empty() {
            self.state.borrow_mut().apply(patch);
            self.notify_listeners();
        }

        tracing::trace!(effect_count = effects.len(), "state committed");

        for effect in effects {
            runner::run(self, effect);
        }
    }

    fn notify_listeners(&self) {
        let listeners = self.listeners.borrow().clone();
        if listeners.is_empty() {
            return;
        }
        let state = self.state.borrow();
        for listener in &listeners {
            listener(&state);
        }
    }
}

/// Resets the in-cycle flag even if a reducer or effect panics.
struct CycleGuard<'a>(&'a Cell<bool>);

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Handle to one combo-box instance.
///
/// Cloning the handle shares the instance.
pub struct ComboBox<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for ComboBox<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: ComboValue> ComboBox<T> {
    /// Creates an instance and dispatches [`Action::Mount`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use combobox_engine::{ComboBox, Config, DetachedHost, Props};
    /// use futures_util::FutureExt;
    ///
    /// let props = Props::new(
    ///     |_query: String| async { Ok(Vec::<String>::new()) }.boxed_local(),
    ///     String::clone,
    /// )
    /// .with_value(Some("Lisbon".to_string()));
    ///
    /// let combo = ComboBox::mount(props, DetachedHost, Config::default());
    /// assert_eq!(combo.state().text_value, "Lisbon");
    /// ```
    pub fn mount(props: Props<T>, host: impl Host + 'static, config: Config) -> Self {
        let host: Rc<dyn Host> = Rc::new(host);
        let inner = Rc::new(Inner {
            state: RefCell::new(ComboBoxState::default()),
            props: RefCell::new(Rc::new(props)),
            host: RefCell::new(Some(host)),
            sequencer: RequestSequencer::new(),
            debounce: DebounceGate::new(Duration::from_millis(config.debounce_ms)),
            config,
            queue: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
            mounted: Cell::new(true),
            listeners: RefCell::new(Vec::new()),
        });

        tracing::debug!(
            debounce_ms = inner.config.debounce_ms,
            "combo box mounted"
        );

        let combo = Self { inner };
        combo.dispatch(Action::Mount);
        combo
    }

    /// Feeds one action through the reducer.
    pub fn dispatch(&self, action: Action<T>) {
        self.inner.dispatch(action);
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ComboBoxState<T> {
        self.inner.state.borrow().clone()
    }

    /// Current props.
    #[must_use]
    pub fn props(&self) -> Rc<Props<T>> {
        self.inner.props()
    }

    /// Configuration the instance was mounted with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Replaces the props and reconciles the displayed value.
    pub fn set_props(&self, props: Props<T>) {
        let previous = self.inner.props.replace(Rc::new(props));
        self.dispatch(Action::PropsChanged {
            prev_value: previous.value.clone(),
        });
    }

    /// Registers a listener called after every committed state change.
    pub fn subscribe(&self, listener: impl Fn(&ComboBoxState<T>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Activates the menu row at `index`.
    ///
    /// Candidates become the value with focus kept in the input, a retry row
    /// repeats its search, notices do nothing. Returns whether the row existed
    /// and was enabled.
    pub fn activate(&self, index: usize) -> bool {
        let row = self
            .inner
            .state
            .borrow()
            .items
            .as_ref()
            .and_then(|items| items.get(index).cloned());

        match row {
            Some(MenuItem::Value(value)) => {
                self.dispatch(Action::ValueChange {
                    value,
                    keep_focus: true,
                });
                true
            }
            Some(MenuItem::Retry { query }) => {
                tracing::debug!(query = %query, "retrying failed search");
                self.dispatch(Action::Search { query });
                true
            }
            Some(MenuItem::Notice(_)) | None => false,
        }
    }

    /// Dispatches [`Action::Focus`].
    pub fn focus(&self) {
        self.dispatch(Action::Focus);
    }

    /// Dispatches [`Action::Blur`].
    pub fn blur(&self) {
        self.dispatch(Action::Blur);
    }

    /// Searches for `query` immediately, bypassing the debounce window.
    pub fn search(&self, query: impl Into<String>) {
        self.dispatch(Action::Search {
            query: query.into(),
        });
    }

    /// Shows the menu without searching.
    pub fn open(&self) {
        self.dispatch(Action::Open);
    }

    /// Hides the menu and drops its items.
    pub fn close(&self) {
        self.dispatch(Action::Close);
    }

    /// Restores the default state and cancels pending and in-flight searches.
    pub fn reset(&self) {
        self.dispatch(Action::Reset);
    }

    /// Whether a debounced search is waiting to fire.
    #[must_use]
    pub fn has_pending_search(&self) -> bool {
        self.inner.debounce.is_pending()
    }

    /// Tears the instance down.
    ///
    /// Host capabilities are released, the pending debounced search is
    /// cancelled, in-flight searches are superseded and later dispatches are
    /// ignored.
    pub fn unmount(&self) {
        if !self.inner.mounted.replace(false) {
            return;
        }
        self.inner.debounce.cancel();
        self.inner.sequencer.invalidate();
        self.inner.host.borrow_mut().take();
        self.inner.queue.borrow_mut().clear();
        self.inner.listeners.borrow_mut().clear();
        tracing::debug!("combo box unmounted");
    }
}
