//! Brute-force k-NN over a contiguous f32 slab.
//!
//! Each scan keeps a bounded max-heap of the `k` closest candidates.
//! Ties on distance break by ascending position so results are
//! deterministic across sequential and parallel scans.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::time::Instant;

use rayon::prelude::*;
use skillmatch_core::config::IndexMetric;
use skillmatch_core::errors::IndexError;
use skillmatch_core::traits::Neighbors;

use crate::metric;

/// Vectors scanned between deadline checks.
pub const SCAN_CHUNK: usize = 1024;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f32,
    position: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.position.cmp(&other.position))
    }
}

fn push_bounded(heap: &mut BinaryHeap<Candidate>, candidate: Candidate, k: usize) {
    if heap.len() < k {
        heap.push(candidate);
    } else if heap.peek().is_some_and(|worst| candidate < *worst) {
        heap.pop();
        heap.push(candidate);
    }
}

/// Row-major vector slab with a fixed dimensionality.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    metric: IndexMetric,
    dimensions: usize,
    data: Vec<f32>,
    parallel_threshold: usize,
}

impl FlatIndex {
    pub fn new(metric: IndexMetric, dimensions: usize) -> Self {
        Self {
            metric,
            dimensions,
            data: Vec::new(),
            parallel_threshold: usize::MAX,
        }
    }

    /// Wrap an existing slab. Its length must be a multiple of `dimensions`.
    pub fn from_slab(
        metric: IndexMetric,
        dimensions: usize,
        data: Vec<f32>,
    ) -> Result<Self, IndexError> {
        if dimensions == 0 || data.len() % dimensions != 0 {
            return Err(IndexError::Corrupt {
                details: format!(
                    "slab of {} floats is not a whole number of {dimensions}-d vectors",
                    data.len()
                ),
            });
        }
        Ok(Self {
            metric,
            dimensions,
            data,
            parallel_threshold: usize::MAX,
        })
    }

    /// Scan with rayon once the index holds at least `threshold` vectors.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn metric(&self) -> IndexMetric {
        self.metric
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        if self.dimensions == 0 {
            0
        } else {
            self.data.len() / self.dimensions
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn slab(&self) -> &[f32] {
        &self.data
    }

    pub fn add(&mut self, vector: &[f32]) -> Result<usize, IndexError> {
        self.check_dims(vector)?;
        self.data.extend_from_slice(vector);
        Ok(self.len() - 1)
    }

    pub fn vector(&self, position: usize) -> Option<&[f32]> {
        let start = position.checked_mul(self.dimensions)?;
        let end = start.checked_add(self.dimensions)?;
        self.data.get(start..end)
    }

    fn check_dims(&self, vector: &[f32]) -> Result<(), IndexError> {
        if vector.len() != self.dimensions {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }
        Ok(())
    }

    /// The `k` nearest vectors to `query`, ascending by distance.
    ///
    /// Fails with `Timeout` once `deadline` passes mid-scan.
    pub fn knn(
        &self,
        query: &[f32],
        k: usize,
        deadline: Option<Instant>,
    ) -> Result<Neighbors, IndexError> {
        self.check_dims(query)?;
        let k = k.min(self.len());
        if k == 0 {
            return Ok(Neighbors::default());
        }

        let started = Instant::now();
        let heap = if self.len() >= self.parallel_threshold {
            self.scan_parallel(query, k, deadline, started)?
        } else {
            self.scan_sequential(query, k, deadline, started)?
        };

        let sorted = heap.into_sorted_vec();
        Ok(Neighbors {
            distances: sorted.iter().map(|c| c.distance).collect(),
            positions: sorted.iter().map(|c| c.position).collect(),
        })
    }

    fn scan_sequential(
        &self,
        query: &[f32],
        k: usize,
        deadline: Option<Instant>,
        started: Instant,
    ) -> Result<BinaryHeap<Candidate>, IndexError> {
        let mut heap = BinaryHeap::with_capacity(k + 1);
        for (chunk_idx, chunk) in self.data.chunks(SCAN_CHUNK * self.dimensions).enumerate() {
            let base = chunk_idx * SCAN_CHUNK;
            check_deadline(deadline, started, base)?;
            for (offset, vector) in chunk.chunks_exact(self.dimensions).enumerate() {
                let candidate = Candidate {
                    distance: metric::distance(self.metric, query, vector),
                    position: base + offset,
                };
                push_bounded(&mut heap, candidate, k);
            }
        }
        Ok(heap)
    }

    fn scan_parallel(
        &self,
        query: &[f32],
        k: usize,
        deadline: Option<Instant>,
        started: Instant,
    ) -> Result<BinaryHeap<Candidate>, IndexError> {
        let scanned = AtomicUsize::new(0);
        let partials: Result<Vec<BinaryHeap<Candidate>>, IndexError> = self
            .data
            .par_chunks(SCAN_CHUNK * self.dimensions)
            .enumerate()
            .map(|(chunk_idx, chunk)| {
                check_deadline(deadline, started, scanned.load(AtomicOrdering::Relaxed))?;
                let base = chunk_idx * SCAN_CHUNK;
                let mut local = BinaryHeap::with_capacity(k + 1);
                for (offset, vector) in chunk.chunks_exact(self.dimensions).enumerate() {
                    let candidate = Candidate {
                        distance: metric::distance(self.metric, query, vector),
                        position: base + offset,
                    };
                    push_bounded(&mut local, candidate, k);
                }
                scanned.fetch_add(chunk.len() / self.dimensions, AtomicOrdering::Relaxed);
                Ok(local)
            })
            .collect();

        let mut merged = BinaryHeap::with_capacity(k + 1);
        for local in partials? {
            for candidate in local {
                push_bounded(&mut merged, candidate, k);
            }
        }
        Ok(merged)
    }
}

fn check_deadline(
    deadline: Option<Instant>,
    started: Instant,
    scanned: usize,
) -> Result<(), IndexError> {
    match deadline {
        Some(at) if Instant::now() >= at => Err(IndexError::Timeout {
            timeout_ms: started.elapsed().as_millis() as u64,
            scanned,
        }),
        _ => Ok(()),
    }
}
