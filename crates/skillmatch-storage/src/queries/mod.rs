//! SQL query modules. Each function takes a borrowed connection.

pub mod community_ops;
pub mod user_crud;

use rusqlite::{Connection, Transaction};

use skillmatch_core::errors::MatchResult;

use crate::to_storage_err;

/// Lift a rusqlite result into the crate error.
pub(crate) fn sql<T>(result: rusqlite::Result<T>) -> MatchResult<T> {
    result.map_err(|e| to_storage_err(e.to_string()))
}

/// Run `body` inside a transaction named `op` for error messages.
/// An error from `body` drops the transaction, which rolls it back.
pub(crate) fn in_transaction<T>(
    conn: &Connection,
    op: &str,
    body: impl FnOnce(&Transaction<'_>) -> MatchResult<T>,
) -> MatchResult<T> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("{op} begin: {e}")))?;
    let value = body(&tx)?;
    tx.commit()
        .map_err(|e| to_storage_err(format!("{op} commit: {e}")))?;
    Ok(value)
}
