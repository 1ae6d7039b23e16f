use serde::{Deserialize, Serialize};

use super::defaults;

/// `[storage]`: where the user directory lives and how its connections are tuned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file holding the user directory.
    pub db_path: String,
    /// Bytes of the file each connection maps into memory.
    pub mmap_size: u64,
    /// SQLite `cache_size`: positive counts pages, negative counts KiB.
    pub cache_size: i64,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout_ms: u32,
    /// Read-only connections serving searches, clamped to 1..=8.
    pub read_pool_size: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_FILENAME.into(),
            mmap_size: defaults::DEFAULT_MMAP_SIZE,
            cache_size: defaults::DEFAULT_CACHE_SIZE,
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
        }
    }
}
