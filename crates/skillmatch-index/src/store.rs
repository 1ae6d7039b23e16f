//! VectorStore: a flat index plus the position → user-id map.

use std::collections::HashMap;
use std::time::Instant;

use skillmatch_core::config::IndexMetric;
use skillmatch_core::errors::{IndexError, MatchError, MatchResult};
use skillmatch_core::traits::{IUserDirectory, IVectorStore, Neighbors};
use tracing::debug;

use crate::flat::FlatIndex;

/// Immutable-once-built vector store.
///
/// Position `i` holds the embedding of user `ids[i]`. Once loaded, a store
/// is shared read-only behind an `Arc`; rebuilding produces a new store.
#[derive(Debug, Clone)]
pub struct VectorStore {
    index: FlatIndex,
    ids: Vec<i64>,
    positions: HashMap<i64, usize>,
}

impl VectorStore {
    pub fn new(metric: IndexMetric, dimensions: usize) -> Self {
        Self {
            index: FlatIndex::new(metric, dimensions),
            ids: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Assemble a store from its persisted parts.
    pub fn from_parts(
        metric: IndexMetric,
        dimensions: usize,
        ids: Vec<i64>,
        slab: Vec<f32>,
    ) -> Result<Self, IndexError> {
        let index = FlatIndex::from_slab(metric, dimensions, slab)?;
        if index.len() != ids.len() {
            return Err(IndexError::Corrupt {
                details: format!(
                    "{} ids for {} vectors",
                    ids.len(),
                    index.len()
                ),
            });
        }
        let mut positions = HashMap::with_capacity(ids.len());
        for (pos, &id) in ids.iter().enumerate() {
            if positions.insert(id, pos).is_some() {
                return Err(IndexError::Corrupt {
                    details: format!("user id {id} appears twice"),
                });
            }
        }
        Ok(Self {
            index,
            ids,
            positions,
        })
    }

    /// Append a user's vector at the next position.
    pub fn push(&mut self, user_id: i64, vector: &[f32]) -> Result<usize, IndexError> {
        if self.positions.contains_key(&user_id) {
            return Err(IndexError::Corrupt {
                details: format!("user id {user_id} already indexed"),
            });
        }
        let pos = self.index.add(vector)?;
        self.ids.push(user_id);
        self.positions.insert(user_id, pos);
        Ok(pos)
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.index.set_parallel_threshold(threshold);
        self
    }

    pub fn metric(&self) -> IndexMetric {
        self.index.metric()
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn slab(&self) -> &[f32] {
        self.index.slab()
    }

    /// Check the store against the directory it was built from.
    ///
    /// Sizes must agree, directory ids must be dense `0..N` in listing
    /// order, and position `i` must map to user `i`.
    pub fn validate_alignment(&self, directory: &dyn IUserDirectory) -> MatchResult<()> {
        match self.pending_users(directory)? {
            0 => Ok(()),
            pending => Err(MatchError::AlignmentViolation {
                reason: format!(
                    "directory has {} users but the index holds {} vectors",
                    self.ids.len() + pending,
                    self.ids.len()
                ),
            }),
        }
    }

    /// Users appended to the directory after this store was built.
    ///
    /// The directory may extend the index: ids stay dense `0..N` and the
    /// first `len()` of them map position-for-position. An index larger
    /// than the directory, a gap, or a remapped position is a violation.
    pub fn pending_users(&self, directory: &dyn IUserDirectory) -> MatchResult<usize> {
        let users = directory.list_users()?;
        if users.len() < self.ids.len() {
            return Err(MatchError::AlignmentViolation {
                reason: format!(
                    "index holds {} vectors but the directory has only {} users",
                    self.ids.len(),
                    users.len()
                ),
            });
        }
        for (pos, user) in users.iter().enumerate() {
            if user.id != pos as i64 {
                return Err(MatchError::AlignmentViolation {
                    reason: format!("directory row {pos} has id {}; ids must be dense", user.id),
                });
            }
            if let Some(&indexed) = self.ids.get(pos) {
                if indexed != user.id {
                    return Err(MatchError::AlignmentViolation {
                        reason: format!(
                            "index position {pos} maps to user {indexed} instead of {}",
                            user.id
                        ),
                    });
                }
            }
        }
        let pending = users.len() - self.ids.len();
        debug!(vectors = self.ids.len(), pending, "index checked against directory");
        Ok(pending)
    }
}

impl IVectorStore for VectorStore {
    fn knn(&self, query: &[f32], k: usize) -> MatchResult<Neighbors> {
        self.knn_with_deadline(query, k, None)
    }

    fn knn_with_deadline(
        &self,
        query: &[f32],
        k: usize,
        deadline: Option<Instant>,
    ) -> MatchResult<Neighbors> {
        Ok(self.index.knn(query, k, deadline)?)
    }

    fn vector(&self, position: usize) -> Option<&[f32]> {
        self.index.vector(position)
    }

    fn user_id_at(&self, position: usize) -> Option<i64> {
        self.ids.get(position).copied()
    }

    fn position_of(&self, user_id: i64) -> Option<usize> {
        self.positions.get(&user_id).copied()
    }

    fn len(&self) -> usize {
        self.ids.len()
    }

    fn dimensions(&self) -> usize {
        self.index.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_maps_positions() {
        let mut store = VectorStore::new(IndexMetric::L2, 2);
        assert_eq!(store.push(0, &[1.0, 0.0]).unwrap(), 0);
        assert_eq!(store.push(1, &[0.0, 1.0]).unwrap(), 1);
        assert_eq!(store.user_id_at(1), Some(1));
        assert_eq!(store.position_of(0), Some(0));
        assert_eq!(store.position_of(7), None);
        assert_eq!(store.vector(1), Some(&[0.0, 1.0][..]));
        assert_eq!(store.vector(2), None);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut store = VectorStore::new(IndexMetric::L2, 1);
        store.push(3, &[1.0]).unwrap();
        assert!(store.push(3, &[2.0]).is_err());
        assert!(VectorStore::from_parts(IndexMetric::L2, 1, vec![1, 1], vec![0.0, 1.0]).is_err());
    }

    #[test]
    fn id_count_must_match_vectors() {
        assert!(VectorStore::from_parts(IndexMetric::L2, 1, vec![0], vec![0.0, 1.0]).is_err());
    }
}
