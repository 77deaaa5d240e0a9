//! Mathematical utilities for the diagram

/// Distance metric and search-bound helpers
pub mod metric;
/// Random sources for site sampling
pub mod random;
