//! # skillmatch-index
//!
//! Exact nearest-neighbor store over profile embeddings.
//!
//! - [`flat`]: brute-force k-NN with a bounded heap, rayon above a size threshold
//! - [`store`]: [`VectorStore`], the position → user-id mapped store
//! - [`format`]: the persisted index file
//! - [`builder`]: embed the whole directory into a fresh store

pub mod builder;
pub mod flat;
pub mod format;
pub mod metric;
pub mod store;

pub use builder::IndexBuilder;
pub use flat::FlatIndex;
pub use store::VectorStore;
