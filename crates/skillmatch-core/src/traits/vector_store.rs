use std::time::Instant;

use crate::errors::MatchResult;

/// Parallel `distances`/`positions` arrays, ascending by distance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neighbors {
    pub distances: Vec<f32>,
    pub positions: Vec<usize>,
}

impl Neighbors {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// `(position, distance)` pairs in index order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.distances.iter().copied())
    }
}

/// Read-only nearest-neighbor store, addressed by dense position.
///
/// Implementations must be safe for concurrent queries.
pub trait IVectorStore: Send + Sync {
    /// The `k` nearest vectors (fewer if the store is smaller).
    fn knn(&self, query: &[f32], k: usize) -> MatchResult<Neighbors>;

    /// As `knn`, failing with a timeout once `deadline` has passed.
    fn knn_with_deadline(
        &self,
        query: &[f32],
        k: usize,
        deadline: Option<Instant>,
    ) -> MatchResult<Neighbors> {
        let _ = deadline;
        self.knn(query, k)
    }

    /// Stored vector at `position`.
    fn vector(&self, position: usize) -> Option<&[f32]>;

    /// User id the vector at `position` was built from.
    fn user_id_at(&self, position: usize) -> Option<i64>;

    /// Position of a user's vector.
    fn position_of(&self, user_id: i64) -> Option<usize>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn dimensions(&self) -> usize;
}
