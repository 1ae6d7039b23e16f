/// Vector store errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("index I/O failed for {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("index file corrupt: {details}")]
    Corrupt { details: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("position {position} out of range for {count} vectors")]
    PositionOutOfRange { position: usize, count: usize },

    #[error("index query exceeded {timeout_ms}ms after scanning {scanned} vectors")]
    Timeout { timeout_ms: u64, scanned: usize },
}
