/// Failures inside the SQLite user directory.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite: {message}")]
    SqliteError { message: String },

    #[error("schema migration to v{version} failed: {reason}")]
    MigrationFailed { version: u32, reason: String },
}
