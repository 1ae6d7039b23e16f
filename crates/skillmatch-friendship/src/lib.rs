//! # skillmatch-friendship
//!
//! Predicts whether two users are likely to collaborate, from interest
//! overlap, age gap, country, and gender.

pub mod classifier;
pub mod engine;
pub mod features;

pub use classifier::LogisticClassifier;
pub use engine::FriendshipEngine;
pub use features::{compute_features, jaccard, mutual_interests};
