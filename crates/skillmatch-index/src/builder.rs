//! Build a vector store by embedding every directory profile.

use std::path::Path;
use std::time::Instant;

use skillmatch_core::config::IndexConfig;
use skillmatch_core::errors::MatchResult;
use skillmatch_core::traits::{IEmbeddingProvider, IUserDirectory};
use tracing::info;

use crate::format;
use crate::store::VectorStore;

/// Profiles embedded per provider call.
pub const EMBED_BATCH_SIZE: usize = 256;

pub struct IndexBuilder<'a> {
    directory: &'a dyn IUserDirectory,
    embedder: &'a dyn IEmbeddingProvider,
    config: &'a IndexConfig,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(
        directory: &'a dyn IUserDirectory,
        embedder: &'a dyn IEmbeddingProvider,
        config: &'a IndexConfig,
    ) -> Self {
        Self {
            directory,
            embedder,
            config,
        }
    }

    /// Embed all profiles in directory order.
    pub fn build(&self) -> MatchResult<VectorStore> {
        let started = Instant::now();
        let users = self.directory.list_users()?;
        let mut store = VectorStore::new(self.config.metric, self.embedder.dimensions())
            .with_parallel_threshold(self.config.parallel_threshold);

        for batch in users.chunks(EMBED_BATCH_SIZE) {
            let texts: Vec<String> = batch.iter().map(|u| u.profile_text.clone()).collect();
            let vectors = self.embedder.embed_batch(&texts)?;
            for (user, vector) in batch.iter().zip(&vectors) {
                store.push(user.id, vector)?;
            }
        }

        info!(
            vectors = users.len(),
            metric = self.config.metric.as_str(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "vector store built"
        );
        Ok(store)
    }

    /// Build, then persist atomically to `path`.
    pub fn build_and_save(&self, path: &Path) -> MatchResult<VectorStore> {
        let _span = skillmatch_observability::index_span!("build", path.display()).entered();
        let store = self.build()?;
        format::save(&store, path)?;
        Ok(store)
    }
}
