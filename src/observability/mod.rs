//! Structured logging for the engine.
//!
//! Every dispatched action runs inside a `dispatch` span, and the runtime emits
//! structured events for state commits, search start and finish, stale result
//! drops and debounce scheduling. The deprecated resolver path warns.
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Hosts that already install their own subscriber can skip this module; the
//! engine only emits through the `tracing` facade.
//!
//! ```rust
//! use combobox_engine::observability::init_tracing;
//! use combobox_engine::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("combo box host started");
//! ```

mod init;

pub use init::init_tracing;
