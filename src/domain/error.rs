//! Error types for the combo-box engine.
//!
//! This module defines the centralized error type [`ComboBoxError`] and a type alias
//! [`Result`] used across the crate. All errors are implemented using the `thiserror`
//! crate for automatic `Error` trait implementation.
//!
//! Note that no error produced here is fatal to a host: fetch failures are turned
//! into a retryable menu state by the runtime and never propagated out of
//! [`crate::ComboBox::dispatch`].

use thiserror::Error;

/// The main error type for combo-box operations.
///
/// # Examples
///
/// ```
/// use combobox_engine::ComboBoxError;
///
/// fn lookup(query: &str) -> Result<Vec<String>, ComboBoxError> {
///     Err(ComboBoxError::Fetch(format!("backend unavailable for {query:?}")))
/// }
///
/// assert!(lookup("abc").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ComboBoxError {
    /// An item fetch failed.
    ///
    /// Returned by injected item fetchers. The runtime converts it into a
    /// `RequestFailure` action carrying the message as the failure reason.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration document could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for combo-box operations.
pub type Result<T> = std::result::Result<T, ComboBoxError>;
