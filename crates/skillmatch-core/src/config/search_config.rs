use serde::{Deserialize, Serialize};

use super::defaults;

/// How a raw index distance becomes a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTransformKind {
    /// `1 - distance`. Meaningful for normalized vectors.
    OneMinusDistance,
    /// `1 / (1 + distance)`. Bounded to (0, 1] for any non-negative distance.
    Inverse,
}

impl ScoreTransformKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "one_minus_distance" => Some(Self::OneMinusDistance),
            "inverse" => Some(Self::Inverse),
            _ => None,
        }
    }
}

/// Similarity search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Result count for `recommend` when the caller gives none.
    pub default_top_n: usize,
    /// Result count for `filteredRecommend` when the caller gives none.
    pub default_filtered_top_n: usize,
    /// Candidate pool multiplier for tag-filtered search.
    pub oversampling_factor: usize,
    /// Stop scanning the filtered pool as soon as `top_n` matches are found.
    pub stop_at_cap: bool,
    /// Widen the window and scan again when a search comes back short.
    pub requery_when_short: bool,
    /// Distance-to-score transform.
    pub score_transform: ScoreTransformKind,
    /// Deadline for a single index query. 0 disables it.
    pub query_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
            default_filtered_top_n: defaults::DEFAULT_FILTERED_TOP_N,
            oversampling_factor: defaults::DEFAULT_OVERSAMPLING_FACTOR,
            stop_at_cap: defaults::DEFAULT_STOP_AT_CAP,
            requery_when_short: defaults::DEFAULT_REQUERY_WHEN_SHORT,
            score_transform: ScoreTransformKind::parse(defaults::DEFAULT_SCORE_TRANSFORM)
                .unwrap_or(ScoreTransformKind::OneMinusDistance),
            query_timeout_ms: defaults::DEFAULT_QUERY_TIMEOUT_MS,
        }
    }
}
