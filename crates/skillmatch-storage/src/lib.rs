//! # skillmatch-storage
//!
//! SQLite-backed user directory. One serialized writer, a round-robin pool
//! of read-only connections, and `user_version` migrations.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use skillmatch_core::errors::{MatchError, StorageError};

/// Wrap any SQLite failure message as a storage error.
pub(crate) fn to_storage_err(message: String) -> MatchError {
    MatchError::Storage(StorageError::SqliteError { message })
}
