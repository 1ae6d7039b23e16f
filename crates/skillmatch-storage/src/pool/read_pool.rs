//! Round-robin read-only connections. Under WAL they never wait on the writer.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use rusqlite::{Connection, OpenFlags};

use skillmatch_core::config::StorageConfig;
use skillmatch_core::errors::MatchResult;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// Upper bound on `read_pool_size`.
pub const MAX_READERS: usize = 8;

pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl ReadPool {
    /// Open `read_pool_size` readers, clamped to `1..=MAX_READERS`.
    pub fn open(path: &Path, config: &StorageConfig) -> MatchResult<Self> {
        let connections = (0..config.read_pool_size.clamp(1, MAX_READERS))
            .map(|_| open_reader(path, config).map(Mutex::new))
            .collect::<MatchResult<Vec<_>>>()?;
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> MatchResult<T>
    where
        F: FnOnce(&Connection) -> MatchResult<T>,
    {
        let slot = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        // A panicking reader leaves nothing half-written behind.
        let conn = self.connections[slot]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&conn)
    }

    pub fn size(&self) -> usize {
        self.connections.len()
    }
}

fn open_reader(path: &Path, config: &StorageConfig) -> MatchResult<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| to_storage_err(format!("open reader {}: {e}", path.display())))?;
    apply_read_pragmas(&conn, config)?;
    Ok(conn)
}
