//! Profile-text embedding cache.
//!
//! Keyed by the blake3 digest of the exact profile text. Values are shared
//! slices, so a hit during an index rebuild costs one refcount bump.

use std::sync::Arc;

use moka::sync::Cache;

pub struct L1MemoryCache {
    cache: Cache<blake3::Hash, Arc<[f32]>>,
}

impl L1MemoryCache {
    /// Holds at most `max_entries` embeddings; TinyLFU picks the victims.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::new(max_entries),
        }
    }

    pub fn get(&self, digest: &blake3::Hash) -> Option<Arc<[f32]>> {
        self.cache.get(digest)
    }

    pub fn insert(&self, digest: blake3::Hash, embedding: Arc<[f32]>) {
        self.cache.insert(digest, embedding);
    }

    /// Entry count after flushing moka's pending bookkeeping.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
