//! Ready-made item fetchers.
//!
//! Hosts usually inject their own fetcher that talks to a backend. This module
//! covers the common case of a list already held in memory.

pub mod fuzzy;

pub use fuzzy::FuzzySource;
