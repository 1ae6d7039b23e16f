//! Per-connection SQLite settings drawn from `[storage]`.
//!
//! Journal mode and sync level belong to the writer. Every connection gets
//! the configured mmap window, page cache, and busy timeout.

use std::time::Duration;

use rusqlite::Connection;

use skillmatch_core::config::StorageConfig;
use skillmatch_core::errors::MatchResult;

use crate::to_storage_err;

pub fn apply_write_pragmas(conn: &Connection, config: &StorageConfig) -> MatchResult<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;",
    )
    .map_err(|e| to_storage_err(format!("writer pragmas: {e}")))?;
    apply_tuning(conn, config)
}

pub fn apply_read_pragmas(conn: &Connection, config: &StorageConfig) -> MatchResult<()> {
    apply_tuning(conn, config)
}

fn apply_tuning(conn: &Connection, config: &StorageConfig) -> MatchResult<()> {
    conn.busy_timeout(Duration::from_millis(u64::from(config.busy_timeout_ms)))
        .map_err(|e| to_storage_err(format!("busy_timeout: {e}")))?;
    // Integers only; nothing user-supplied reaches this string.
    conn.execute_batch(&format!(
        "PRAGMA mmap_size = {};
         PRAGMA cache_size = {};",
        config.mmap_size, config.cache_size
    ))
    .map_err(|e| to_storage_err(format!("tuning pragmas: {e}")))
}

/// Whether the connection's journal is in WAL mode.
pub fn verify_wal_mode(conn: &Connection) -> MatchResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}

/// Current `cache_size` of a connection, for checking config plumbing.
pub fn cache_size(conn: &Connection) -> MatchResult<i64> {
    conn.pragma_query_value(None, "cache_size", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}
