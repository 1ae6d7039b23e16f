//! The single write connection. Profile inserts and community rewrites
//! serialize here; `user_id` allocation relies on it.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::warn;

use skillmatch_core::config::StorageConfig;
use skillmatch_core::errors::MatchResult;

use super::pragmas::apply_write_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, config: &StorageConfig) -> MatchResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| to_storage_err(format!("open writer {}: {e}", path.display())))?;
        Self::configured(conn, config)
    }

    pub fn open_in_memory(config: &StorageConfig) -> MatchResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::configured(conn, config)
    }

    fn configured(conn: Connection, config: &StorageConfig) -> MatchResult<Self> {
        apply_write_pragmas(&conn, config)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive use of the writer.
    ///
    /// If an earlier caller panicked while holding the lock, whatever
    /// transaction it left open is rolled back before `f` runs.
    pub fn with_conn<F, T>(&self, f: F) -> MatchResult<T>
    where
        F: FnOnce(&Connection) -> MatchResult<T>,
    {
        let guard = match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                let guard = poisoned.into_inner();
                if !guard.is_autocommit() {
                    warn!("writer lock poisoned mid-transaction; rolling back");
                    guard
                        .execute_batch("ROLLBACK")
                        .map_err(|e| to_storage_err(format!("writer recovery: {e}")))?;
                }
                guard
            }
        };
        f(&guard)
    }
}
