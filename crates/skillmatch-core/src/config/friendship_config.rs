use serde::{Deserialize, Serialize};

use super::defaults;

/// Logistic friendship classifier coefficients.
///
/// Feature order: `[jaccard, age_gap_years, same_country, same_gender]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendshipConfig {
    pub intercept: f64,
    pub coefficients: [f64; 4],
    /// Probability at or above which a collaboration is "strong".
    pub threshold: f64,
}

impl Default for FriendshipConfig {
    fn default() -> Self {
        Self {
            intercept: defaults::DEFAULT_FRIENDSHIP_INTERCEPT,
            coefficients: defaults::DEFAULT_FRIENDSHIP_COEFFICIENTS,
            threshold: defaults::DEFAULT_FRIENDSHIP_THRESHOLD,
        }
    }
}
