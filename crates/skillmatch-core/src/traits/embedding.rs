use crate::errors::MatchResult;

/// Maps profile or query text to a fixed-width vector.
///
/// The same text must always produce the same vector; the index is built
/// once and queried with fresh embeddings.
pub trait IEmbeddingProvider: Send + Sync {
    fn embed(&self, text: &str) -> MatchResult<Vec<f32>>;

    /// One vector per input, in input order.
    fn embed_batch(&self, texts: &[String]) -> MatchResult<Vec<Vec<f32>>>;

    fn dimensions(&self) -> usize;

    fn name(&self) -> &str;
}
