//! Embedding providers.

mod hashing_provider;

pub use hashing_provider::HashingProvider;

use skillmatch_core::config::EmbeddingConfig;
use skillmatch_core::errors::{EmbeddingError, MatchResult};
use skillmatch_core::traits::IEmbeddingProvider;

/// Build the provider named in configuration.
pub fn create_provider(config: &EmbeddingConfig) -> MatchResult<Box<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "hashing" | "tfidf" => Ok(Box::new(HashingProvider::new(config.dimensions))),
        other => Err(EmbeddingError::ProviderUnavailable {
            provider: other.to_string(),
        }
        .into()),
    }
}
