/// Failures turning profile text into vectors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("embedding has {actual} dimensions, configured for {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("unknown embedding provider {provider:?}")]
    ProviderUnavailable { provider: String },
}
