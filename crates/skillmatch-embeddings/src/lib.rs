//! # skillmatch-embeddings
//!
//! The `embed(text) -> vector` collaborator. Profiles are embedded by a
//! provider chosen from configuration, behind a blake3-keyed L1 cache.

pub mod cache;
pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::HashingProvider;
