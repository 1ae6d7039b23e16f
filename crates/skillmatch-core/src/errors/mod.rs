//! Error taxonomy. Every subsystem error rolls up into [`MatchError`].

mod embedding_error;
mod index_error;
mod storage_error;

pub use embedding_error::EmbeddingError;
pub use index_error::IndexError;
pub use storage_error::StorageError;

/// Top-level error for every skillmatch operation.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// The requested user id is outside the index or absent from the directory.
    /// Both search paths report this same kind.
    #[error("unknown user: {id}")]
    UnknownUser { id: i64 },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Directory and vector store disagree on ordering or size. Fatal at startup.
    #[error("directory/index alignment violated: {reason}")]
    AlignmentViolation { reason: String },

    /// Missing or unreadable configuration or index files. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

impl MatchError {
    /// Whether this error must stop the service from serving traffic.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MatchError::Configuration(_)
                | MatchError::AlignmentViolation { .. }
                | MatchError::Index(IndexError::Corrupt { .. })
                | MatchError::Index(IndexError::Io { .. })
        )
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(e: serde_json::Error) -> Self {
        MatchError::Serialization(e.to_string())
    }
}

pub type MatchResult<T> = Result<T, MatchError>;
