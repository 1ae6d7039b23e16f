use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{LABEL_INVALID, LABEL_STRONG, LABEL_WEAK};

/// Hand-engineered features for a pair of users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FriendshipFeatures {
    /// |A ∩ B| / |A ∪ B| over interest tokens, 0 when both are empty.
    pub jaccard: f64,
    /// Absolute age difference in years, 0 when either age is unknown.
    pub age_gap: f64,
    pub same_country: bool,
    pub same_gender: bool,
}

impl FriendshipFeatures {
    /// Feature vector in classifier order.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.jaccard,
            self.age_gap,
            if self.same_country { 1.0 } else { 0.0 },
            if self.same_gender { 1.0 } else { 0.0 },
        ]
    }
}

/// Outcome of a friendship prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FriendshipPrediction {
    Strong,
    Weak,
    InvalidUsers,
}

impl FriendshipPrediction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Strong => LABEL_STRONG,
            Self::Weak => LABEL_WEAK,
            Self::InvalidUsers => LABEL_INVALID,
        }
    }
}

impl fmt::Display for FriendshipPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
