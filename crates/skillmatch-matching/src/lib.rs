//! # skillmatch-matching
//!
//! The similarity search pipeline: query the vector store, drop the
//! query's own position, turn distances into scores, and join against
//! the user directory. The filtered variant oversamples the pool and
//! keeps only candidates sharing a tag with the caller's selection.

pub mod engine;
pub mod filter;
pub mod score;

pub use engine::SimilarityEngine;
pub use filter::{FilterPolicy, TagFilter};
pub use score::ScoreTransform;
