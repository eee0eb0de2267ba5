//! Application layer: state, actions, effects and the reducer.
//!
//! This module holds the pure half of the engine. Nothing here performs I/O or
//! touches the host; the runtime layer feeds actions in and interprets the
//! effects that come out.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Event → Action → reduce() → StatePatch + Effects → Effect Runner
//!                 ↑                                            ↓
//!                 └────────── Search Completions ──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Actions describing what happened
//! - [`effects`]: Side effect commands emitted by the reducer
//! - [`keys`]: Key press descriptors
//! - [`props`]: Host-supplied value and capabilities
//! - [`reducer`]: State transition logic
//! - [`state`]: State container and partial patches

pub mod actions;
pub mod effects;
pub mod keys;
pub mod props;
pub mod reducer;
pub mod state;

pub use actions::Action;
pub use effects::Effect;
pub use keys::Key;
pub use props::{Callback, FetchItems, Formatter, InputResolution, Props};
pub use reducer::reduce;
pub use state::{ComboBoxState, StatePatch};
