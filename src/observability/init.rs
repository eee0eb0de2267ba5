//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber that receives the engine's
//! spans and events: an `EnvFilter` layer followed by a formatting layer that
//! writes to stderr.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, when set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times; only the first successful call
/// installs a subscriber, later calls (or an already-installed subscriber from
/// the host application) leave the existing one in place.
///
/// # Example
///
/// ```rust
/// use combobox_engine::observability::init_tracing;
/// use combobox_engine::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        );

    if subscriber.try_init().is_err() {
        tracing::trace!("tracing subscriber already installed");
    }
}
