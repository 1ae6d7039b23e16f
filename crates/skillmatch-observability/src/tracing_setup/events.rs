//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// An index hit that no longer resolves to a directory row.
///
/// Skipped by the caller; never surfaced as an error.
pub fn stale_index_entry(position: usize, user_id: Option<i64>, reason: &str) {
    tracing::warn!(
        event = "stale_index_entry",
        position = position,
        user_id = ?user_id,
        reason = %reason,
        "stale index entry skipped"
    );
}

/// A search finished.
pub fn search_completed(kind: &str, user_id: i64, returned: usize, scanned: usize, elapsed_ms: u128) {
    tracing::debug!(
        event = "search_completed",
        kind = %kind,
        user_id = user_id,
        returned = returned,
        scanned = scanned,
        elapsed_ms = elapsed_ms as u64,
        "search completed"
    );
}

/// A profile was written to the directory.
pub fn profile_created(user_id: i64, interests: usize) {
    tracing::info!(
        event = "profile_created",
        user_id = user_id,
        interests = interests,
        "profile created"
    );
}

/// An index file was loaded and validated.
pub fn index_loaded(path: &str, vectors: usize, dimensions: usize, metric: &str) {
    tracing::info!(
        event = "index_loaded",
        path = %path,
        vectors = vectors,
        dimensions = dimensions,
        metric = %metric,
        "vector index loaded"
    );
}

/// The index was rebuilt from the directory and swapped in.
pub fn index_rebuilt(path: &str, vectors: usize, elapsed_ms: u128) {
    tracing::info!(
        event = "index_rebuilt",
        path = %path,
        vectors = vectors,
        elapsed_ms = elapsed_ms as u64,
        "vector index rebuilt"
    );
}

/// A stored date of birth could not be parsed.
pub fn malformed_date(user_id: i64, raw: &str) {
    tracing::warn!(
        event = "malformed_date",
        user_id = user_id,
        raw = %raw,
        "malformed date of birth; age unknown"
    );
}
