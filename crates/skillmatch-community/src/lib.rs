//! # skillmatch-community
//!
//! Groups users into interest communities by clustering their
//! embeddings, answers co-membership queries, and aggregates
//! directory-wide insights.

pub mod clustering;
pub mod engine;
pub mod insights;

pub use engine::CommunityEngine;
pub use insights::compute_insights;
