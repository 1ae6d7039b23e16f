//! EmbeddingEngine: the main entry point for skillmatch-embeddings.
//!
//! Coordinates provider selection, the L1 cache, and dimension checks.
//! Implements `IEmbeddingProvider`.

use std::sync::Arc;

use skillmatch_core::config::EmbeddingConfig;
use skillmatch_core::errors::{EmbeddingError, MatchResult};
use skillmatch_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::L1MemoryCache;
use crate::providers;

/// Cached, dimension-checked embedding front end.
pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: L1MemoryCache,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Create a new engine from configuration.
    pub fn new(config: EmbeddingConfig) -> MatchResult<Self> {
        let provider = providers::create_provider(&config)?;
        Self::with_provider(provider, config)
    }

    /// Wrap an explicit provider. Its dimensionality must match the config.
    pub fn with_provider(
        provider: Box<dyn IEmbeddingProvider>,
        config: EmbeddingConfig,
    ) -> MatchResult<Self> {
        if provider.dimensions() != config.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: config.dimensions,
                actual: provider.dimensions(),
            }
            .into());
        }

        let cache = L1MemoryCache::new(config.l1_cache_size);
        info!(
            provider = provider.name(),
            dims = config.dimensions,
            cache_size = config.l1_cache_size,
            "EmbeddingEngine initialized"
        );

        Ok(Self {
            provider,
            cache,
            config,
        })
    }

    /// Content hash used as the cache key.
    pub fn content_hash(text: &str) -> blake3::Hash {
        blake3::hash(text.as_bytes())
    }

    pub fn active_provider(&self) -> &str {
        self.provider.name()
    }

    /// Approximate number of cached embeddings.
    pub fn cached_entries(&self) -> u64 {
        self.cache.len()
    }

    fn validate(&self, embedding: &[f32]) -> MatchResult<()> {
        if embedding.len() != self.config.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.dimensions,
                actual: embedding.len(),
            }
            .into());
        }
        if embedding.iter().any(|v| !v.is_finite()) {
            return Err(EmbeddingError::InferenceFailed {
                reason: "provider returned a non-finite component".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> MatchResult<Vec<f32>> {
        let hash = Self::content_hash(text);
        if let Some(cached) = self.cache.get(&hash) {
            debug!(hash = %hash.to_hex(), "embedding cache hit");
            return Ok(cached.to_vec());
        }

        let _span = skillmatch_observability::embedding_span!(self.provider.name(), 1usize).entered();
        let embedding = self.provider.embed(text)?;
        self.validate(&embedding)?;
        self.cache.insert(hash, Arc::from(embedding.as_slice()));
        Ok(embedding)
    }

    fn embed_batch(&self, texts: &[String]) -> MatchResult<Vec<Vec<f32>>> {
        let _span =
            skillmatch_observability::embedding_span!(self.provider.name(), texts.len()).entered();

        let hashes: Vec<blake3::Hash> = texts.iter().map(|t| Self::content_hash(t)).collect();
        let mut out: Vec<Option<Vec<f32>>> = hashes
            .iter()
            .map(|h| self.cache.get(h).map(|cached| cached.to_vec()))
            .collect();

        let missing: Vec<usize> = (0..texts.len()).filter(|&i| out[i].is_none()).collect();
        if !missing.is_empty() {
            let batch: Vec<String> = missing.iter().map(|&i| texts[i].clone()).collect();
            let embedded = self.provider.embed_batch(&batch)?;
            if embedded.len() != batch.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "provider returned {} embeddings for {} texts",
                        embedded.len(),
                        batch.len()
                    ),
                }
                .into());
            }
            for (slot, embedding) in missing.into_iter().zip(embedded) {
                self.validate(&embedding)?;
                self.cache.insert(hashes[slot], Arc::from(embedding.as_slice()));
                out[slot] = Some(embedding);
            }
        }

        Ok(out.into_iter().flatten().collect())
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn name(&self) -> &str {
        "skillmatch-embedding-engine"
    }
}
