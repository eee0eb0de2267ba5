//! Combobox Engine: the interaction core of combo boxes and autocomplete inputs.
//!
//! The crate provides a headless, toolkit-independent engine that:
//! - Drives a combo box through a pure reducer over a closed set of actions
//! - Runs side effects from descriptors after each state commit
//! - Searches asynchronously through an injected item fetcher
//! - Debounces searches triggered by typing, cancelable on blur
//! - Discards stale search results through a per-instance generation counter
//! - Derives a ready-to-draw menu view model from state
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Toolkit (widgets, DOM, TUI)                   │  ← Renders, forwards events
//! └─────────────────────────────────────────────────────┘
//!                        │ actions            ▲ Host trait calls
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime Layer (runtime/)                           │  ← Dispatch loop
//! │  - ComboBox instance handle                         │  ← Effect runner
//! │  - Request sequencer, debounce gate                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Pure state machine
//! │  - Actions, effects, reducer, state, props          │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Sources       │   │ Infrastructure│
//! │ (ui/)         │   │ (sources/)    │   │ (infra…/)     │
//! │ - Menu VM     │   │ - Fuzzy list  │   │ - Host trait  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and Observability (observability/)│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Actions, effects, state, props and the reducer
//! - [`domain`]: Menu content model and error types
//! - [`infrastructure`]: Host capability trait
//! - [`runtime`]: Instance handle, dispatch loop, sequencing, debouncing
//! - [`sources`]: Ready-made item fetchers
//! - [`ui`]: Menu view model
//! - [`observability`]: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use combobox_engine::{Action, ComboBox, Config, DetachedHost, Props};
//! use combobox_engine::sources::FuzzySource;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let local = tokio::task::LocalSet::new();
//! local
//!     .run_until(async {
//!         let source = FuzzySource::new(
//!             vec!["Lisbon".to_string(), "Porto".to_string()],
//!             String::clone,
//!         );
//!         let fetch = source.fetcher();
//!         let props = Props::new(move |query| fetch(query), String::clone);
//!
//!         let combo = ComboBox::mount(props, DetachedHost, Config::default());
//!         combo.dispatch(Action::Focus);
//!         tokio::task::yield_now().await;
//!
//!         assert!(combo.state().opened);
//!         assert_eq!(combo.state().values().count(), 2);
//!     })
//!     .await;
//! # }
//! ```
//!
//! # Concurrency Model
//!
//! Everything runs on one thread. Searches and debounce timers are
//! `spawn_local` tasks on a tokio `LocalSet`; completions re-enter the engine
//! as ordinary actions. No reducer call ever overlaps another, and no locks
//! are involved.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod runtime;
pub mod sources;

pub mod ui;

pub mod observability;

pub use app::{reduce, Action, ComboBoxState, Effect, InputResolution, Key, Props, StatePatch};
pub use domain::{ComboBoxError, ComboValue, MenuItem, Notice, Result};
pub use infrastructure::{DetachedHost, Host};
pub use runtime::ComboBox;
pub use ui::{MenuRow, MenuViewModel};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Default quiescence window for searches triggered by typing.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Engine configuration.
///
/// Labels are plain strings; locale lookup is the host's business.
///
/// # Example
///
/// ```toml
/// debounce_ms = 250
/// failure_message = "Search is unavailable right now"
/// retry_label = "Try again"
/// not_found_message = "No matches"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiescence window in milliseconds before a typed query is searched.
    ///
    /// Default: `300`
    pub debounce_ms: u64,

    /// Text of the notice shown after a failed search.
    pub failure_message: String,

    /// Text of the row repeating a failed search.
    pub retry_label: String,

    /// Text shown when a search returns no candidates.
    pub not_found_message: String,

    /// Tracing level used by [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            failure_message:
                "Something went wrong. Check your internet connection and try again".to_string(),
            retry_label: "Refresh".to_string(),
            not_found_message: "Not found".to_string(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map, such as element attributes.
    ///
    /// # Parsing Rules
    ///
    /// - `debounce_ms`: String → `u64` (falls back to 300 on parse error)
    /// - `failure_message`, `retry_label`, `not_found_message`: taken verbatim
    ///   unless blank
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use combobox_engine::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    /// map.insert("retry_label".to_string(), "Again".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.debounce_ms, 150);
    /// assert_eq!(config.retry_label, "Again");
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let text = |key: &str, fallback: String| {
            map.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map_or(fallback, String::from)
        };

        let debounce_ms = map
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        Self {
            debounce_ms,
            failure_message: text("failure_message", defaults.failure_message),
            retry_label: text("retry_label", defaults.retry_label),
            not_found_message: text("not_found_message", defaults.not_found_message),
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from a TOML document; missing keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ComboBoxError::ConfigParse`] for malformed TOML and
    /// [`ComboBoxError::Config`] for values outside their domain.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let config: Self = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ComboBoxError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading combo box configuration");
        Self::from_toml_str(&document)
    }

    fn validate(&self) -> Result<()> {
        if let Some(level) = &self.trace_level {
            if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
                return Err(ComboBoxError::Config(format!(
                    "unknown trace_level {level:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn map_falls_back_on_garbage() {
        let mut map = BTreeMap::new();
        map.insert("debounce_ms".to_string(), "soon".to_string());
        map.insert("not_found_message".to_string(), "   ".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.not_found_message, Config::default().not_found_message);
    }

    #[test]
    fn toml_keeps_defaults_for_missing_keys() {
        let config = Config::from_toml_str("debounce_ms = 50\nretry_label = \"Again\"\n").unwrap();
        assert_eq!(config.debounce_ms, 50);
        assert_eq!(config.retry_label, "Again");
        assert_eq!(config.failure_message, Config::default().failure_message);
    }

    #[test]
    fn toml_rejects_unknown_trace_level() {
        let err = Config::from_toml_str("trace_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ComboBoxError::Config(_)));
    }

    #[test]
    fn toml_reports_parse_errors() {
        let err = Config::from_toml_str("debounce_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, ComboBoxError::ConfigParse(_)));
    }

    #[test]
    fn file_loading_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not_found_message = \"Nothing\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.not_found_message, "Nothing");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ComboBoxError::Io(_)));
    }
}
