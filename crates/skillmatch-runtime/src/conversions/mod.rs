//! Rust → JSON conversions for binding results.

pub mod error_types;
pub mod match_types;
