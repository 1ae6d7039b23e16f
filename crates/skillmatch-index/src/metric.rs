//! Distance functions. Smaller is closer for every metric.

use skillmatch_core::config::IndexMetric;

/// Squared Euclidean distance.
#[inline]
pub fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// `1 - cosine_similarity`. A zero vector is at distance 1 from everything.
#[inline]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f32::EPSILON {
        return 1.0;
    }
    1.0 - dot / denom
}

#[inline]
pub fn distance(metric: IndexMetric, a: &[f32], b: &[f32]) -> f32 {
    match metric {
        IndexMetric::L2 => squared_l2(a, b),
        IndexMetric::Cosine => cosine_distance(a, b),
    }
}

/// Wire code for the index file header.
pub fn metric_code(metric: IndexMetric) -> u8 {
    match metric {
        IndexMetric::L2 => 0,
        IndexMetric::Cosine => 1,
    }
}

pub fn metric_from_code(code: u8) -> Option<IndexMetric> {
    match code {
        0 => Some(IndexMetric::L2),
        1 => Some(IndexMetric::Cosine),
        _ => None,
    }
}
