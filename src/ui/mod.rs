//! Presentation layer: state to displayable menu rows.
//!
//! Rendering itself belongs to the host toolkit. This module stops at a view
//! model the host can draw directly.
//!
//! ```text
//! ComboBoxState → MenuViewModel::compute → MenuViewModel → host rendering
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Menu view model types and computation

pub mod viewmodel;

pub use viewmodel::{MenuRow, MenuViewModel};
