//! Runtime layer driving the reducer and its effects.
//!
//! The runtime owns everything stateful about a combo-box instance. It is built
//! for a single-threaded cooperative event loop: one tokio current-thread
//! runtime with a [`tokio::task::LocalSet`], no locks, `Rc`/`RefCell` shared
//! state, and a generation counter in place of concurrency control.
//!
//! # Modules
//!
//! - [`dispatcher`]: Instance handle and the dispatch loop
//! - [`debounce`]: Cancelable delayed task for text-change searches
//! - [`sequencer`]: Generation counter discarding stale search results
//! - `runner`: Effect interpretation (internal)

pub mod debounce;
pub mod dispatcher;
mod runner;
pub mod sequencer;

pub use debounce::DebounceGate;
pub use dispatcher::ComboBox;
pub use sequencer::{Generation, RequestSequencer};
