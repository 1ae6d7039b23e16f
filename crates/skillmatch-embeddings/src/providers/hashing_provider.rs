//! Feature-hashed interest vectors.
//!
//! Profile text is a whitespace-joined interest list, so every
//! whitespace-separated word is one interest. Each interest is lowercased,
//! hashed into a bucket, and weighted by its share of the profile scaled
//! by `1 + ln(len)`. The result is L2-normalized.

use std::collections::BTreeMap;

use skillmatch_core::errors::MatchResult;
use skillmatch_core::traits::IEmbeddingProvider;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic embedder that needs no model files.
///
/// Unit-length output keeps squared-L2 distances in `[0, 4]`, which is
/// what the `1 - distance` score transform expects.
pub struct HashingProvider {
    dimensions: usize,
}

impl HashingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn bucket(&self, interest: &str) -> usize {
        let hash = interest
            .bytes()
            .fold(FNV_OFFSET, |h, b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        (hash % self.dimensions as u64) as usize
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];

        // Ordered map: colliding buckets must sum in the same order every call.
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for word in text.split_whitespace() {
            *counts.entry(word.to_lowercase()).or_insert(0) += 1;
        }
        let total: u32 = counts.values().sum();
        if total == 0 {
            return vector;
        }

        for (interest, count) in &counts {
            let length_weight = 1.0 + (interest.chars().count() as f32).ln();
            vector[self.bucket(interest)] += *count as f32 / total as f32 * length_weight;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            vector.iter_mut().for_each(|x| *x /= norm);
        }
        vector
    }
}

impl IEmbeddingProvider for HashingProvider {
    fn embed(&self, text: &str) -> MatchResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> MatchResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|text| self.vectorize(text)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing"
    }
}
