use serde::{Deserialize, Serialize};

use super::Age;

/// One row of a search result. Rows are ordered by ascending index distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub user_id: i64,
    pub name: String,
    pub city: String,
    pub profile_text: String,
    /// Similarity rounded to 2 decimals.
    pub similarity_score: f64,
    pub age: Age,
}
