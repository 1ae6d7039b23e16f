use serde::{Deserialize, Serialize};

use super::defaults;

/// `[embedding]`: how profile text becomes a vector.
///
/// `dimensions` must match the index file; a mismatch stops startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// `"hashing"` (alias `"tfidf"`).
    pub provider: String,
    pub dimensions: usize,
    /// Profile texts whose embeddings stay cached.
    pub l1_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.into(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
        }
    }
}
