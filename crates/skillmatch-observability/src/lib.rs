//! # skillmatch-observability
//!
//! Structured logging for every skillmatch crate: subscriber setup,
//! span macros for the hot paths, and one helper per notable event.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from_config, init_tracing_with_filter};
