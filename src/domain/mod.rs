//! Domain layer for the combo-box engine.
//!
//! This module contains the core domain types, independent of the runtime and
//! of any host toolkit.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Menu content model and the [`ComboValue`] bound
//!
//! # Examples
//!
//! ```
//! use combobox_engine::domain::{MenuItem, Result};
//!
//! fn first_row() -> Result<MenuItem<String>> {
//!     Ok(MenuItem::Value("Moscow".to_string()))
//! }
//! # assert!(first_row().is_ok());
//! ```

pub mod error;
pub mod item;

pub use error::{ComboBoxError, Result};
pub use item::{ComboValue, MenuItem, Notice};
