//! Schema versions tracked in `PRAGMA user_version`.
//!
//! Each step runs in one transaction with its version bump, so a failed
//! step leaves the previous version intact.

pub mod v001_users;
pub mod v002_communities;

use rusqlite::Connection;
use tracing::info;

use skillmatch_core::errors::{MatchResult, StorageError};

const STEPS: &[(u32, &str)] = &[
    (1, v001_users::MIGRATION_SQL),
    (2, v002_communities::MIGRATION_SQL),
];

pub const LATEST_VERSION: u32 = 2;

pub fn run_migrations(conn: &Connection) -> MatchResult<()> {
    let current = current_version(conn)?;
    for &(version, sql) in STEPS.iter().filter(|(v, _)| *v > current) {
        apply_step(conn, version, sql)?;
        info!(version, "schema migrated");
    }
    Ok(())
}

fn apply_step(conn: &Connection, version: u32, sql: &str) -> MatchResult<()> {
    let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
        version,
        reason: e.to_string(),
    };
    let tx = conn.unchecked_transaction().map_err(failed)?;
    tx.execute_batch(sql).map_err(failed)?;
    tx.pragma_update(None, "user_version", version)
        .map_err(failed)?;
    tx.commit().map_err(failed)?;
    Ok(())
}

pub fn current_version(conn: &Connection) -> MatchResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| {
            StorageError::SqliteError {
                message: format!("read user_version: {e}"),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use skillmatch_core::errors::MatchError;

    use super::*;

    #[test]
    fn rerunning_is_a_no_op() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(current_version(&conn).unwrap(), LATEST_VERSION);
    }

    #[test]
    fn failed_step_keeps_previous_version() {
        let conn = Connection::open_in_memory().unwrap();
        apply_step(&conn, 1, v001_users::MIGRATION_SQL).unwrap();
        let err = apply_step(&conn, 2, "CREATE TABLE broken (").unwrap_err();
        assert!(matches!(
            err,
            MatchError::Storage(StorageError::MigrationFailed { version: 2, .. })
        ));
        assert_eq!(current_version(&conn).unwrap(), 1);
    }
}
