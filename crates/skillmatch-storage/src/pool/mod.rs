//! The writer plus an optional read pool.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use skillmatch_core::config::StorageConfig;
use skillmatch_core::errors::MatchResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

pub struct ConnectionPool {
    pub writer: WriteConnection,
    /// `None` for in-memory databases: a second in-memory connection is a
    /// separate, empty database, so reads go through the writer.
    pub readers: Option<ReadPool>,
    pub db_path: Option<PathBuf>,
}

impl ConnectionPool {
    /// The writer opens first so the file and its WAL exist before the
    /// read-only connections attach.
    pub fn open(path: &Path, config: &StorageConfig) -> MatchResult<Self> {
        let writer = WriteConnection::open(path, config)?;
        let readers = ReadPool::open(path, config)?;
        Ok(Self {
            writer,
            readers: Some(readers),
            db_path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory(config: &StorageConfig) -> MatchResult<Self> {
        Ok(Self {
            writer: WriteConnection::open_in_memory(config)?,
            readers: None,
            db_path: None,
        })
    }

    /// Run a read-only closure on a pooled reader, or on the writer when
    /// there is no pool.
    pub fn with_reader<F, T>(&self, f: F) -> MatchResult<T>
    where
        F: FnOnce(&Connection) -> MatchResult<T>,
    {
        match &self.readers {
            Some(readers) => readers.with_conn(f),
            None => self.writer.with_conn(f),
        }
    }

    pub fn reader_count(&self) -> usize {
        self.readers.as_ref().map_or(0, ReadPool::size)
    }
}
