//! HDBSCAN over profile embeddings.
//!
//! Noise points are not dropped: each becomes a community of its own,
//! numbered after the last real cluster.

use hdbscan::{Hdbscan, HdbscanHyperParams};
use tracing::warn;

/// One community label per input vector.
///
/// Fewer vectors than `min_cluster_size` (or a clustering failure)
/// leaves every point in its own community.
pub fn assign_labels(embeddings: &[Vec<f32>], min_cluster_size: usize) -> Vec<i64> {
    let min_cluster_size = min_cluster_size.max(2);
    if embeddings.len() < min_cluster_size {
        return (0..embeddings.len() as i64).collect();
    }

    let hyper_params = HdbscanHyperParams::builder()
        .min_cluster_size(min_cluster_size)
        .min_samples(1)
        .build();

    // hdbscan borrows its input as `&Vec<Vec<_>>`.
    let data = embeddings.to_vec();
    let clusterer = Hdbscan::new(&data, hyper_params);
    let raw = match clusterer.cluster() {
        Ok(labels) => labels,
        Err(e) => {
            warn!(error = ?e, points = embeddings.len(), "clustering failed; all points are singletons");
            return (0..embeddings.len() as i64).collect();
        }
    };

    with_singleton_noise(&raw)
}

/// Map negative (noise) labels to fresh ids after the highest cluster id.
pub fn with_singleton_noise(raw: &[i32]) -> Vec<i64> {
    let mut next = raw.iter().copied().max().map_or(0, |m| m.max(-1) as i64 + 1);
    raw.iter()
        .map(|&label| {
            if label >= 0 {
                label as i64
            } else {
                let id = next;
                next += 1;
                id
            }
        })
        .collect()
}

/// Number of distinct communities in a label vector.
pub fn community_count(labels: &[i64]) -> usize {
    let mut distinct: Vec<i64> = labels.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    distinct.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_points_are_singletons() {
        assert_eq!(assign_labels(&[vec![1.0, 0.0]], 2), vec![0]);
        assert!(assign_labels(&[], 2).is_empty());
    }

    #[test]
    fn noise_gets_fresh_ids() {
        assert_eq!(with_singleton_noise(&[0, -1, 1, -1]), vec![0, 2, 1, 3]);
        assert_eq!(with_singleton_noise(&[-1, -1]), vec![0, 1]);
    }

    #[test]
    fn every_point_is_labelled() {
        let embeddings = vec![
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.1],
            vec![1.0, 1.1, 1.0],
            vec![10.0, 10.0, 10.0],
            vec![10.0, 10.1, 10.0],
            vec![10.1, 10.0, 10.0],
        ];
        let labels = assign_labels(&embeddings, 2);
        assert_eq!(labels.len(), 6);
        assert!(labels.iter().all(|&l| l >= 0));
        assert!(community_count(&labels) >= 2);
        assert_ne!(labels[0], labels[3]);
    }
}
