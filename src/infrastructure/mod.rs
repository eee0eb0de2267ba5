//! Infrastructure layer for host toolkit interactions.
//!
//! This module defines the seam between the engine and the widget toolkit that
//! renders it.

pub mod host;

pub use host::{DetachedHost, Host};
