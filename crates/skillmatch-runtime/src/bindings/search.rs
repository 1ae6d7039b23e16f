//! Search bindings: recommend, filteredRecommend, textMatches.

use skillmatch_core::errors::{MatchError, MatchResult};
use tracing::debug;

use crate::conversions::{error_types, match_types};
use crate::runtime::MatchRuntime;

/// Nearest users to `user_id`. An unknown user gives `[]`.
pub fn recommend(
    rt: &MatchRuntime,
    user_id: i64,
    top_n: Option<usize>,
) -> MatchResult<serde_json::Value> {
    let top_n = top_n.unwrap_or(rt.config.search.default_top_n);
    match rt.top_matches(user_id, top_n) {
        Ok(matches) => match_types::matches_to_json(&matches),
        Err(MatchError::UnknownUser { id }) => {
            debug!(user_id = id, "recommend for unknown user");
            Ok(serde_json::Value::Array(Vec::new()))
        }
        Err(e) => Err(e),
    }
}

/// Nearest users sharing at least one of `tags`.
/// An unknown user gives `{"error": "UserID <id> not found.", "userId": <id>}`.
pub fn filtered_recommend(
    rt: &MatchRuntime,
    user_id: i64,
    tags: &[String],
    top_n: Option<usize>,
) -> MatchResult<serde_json::Value> {
    let top_n = top_n.unwrap_or(rt.config.search.default_filtered_top_n);
    match rt.filtered_matches(user_id, tags, top_n) {
        Ok(matches) => match_types::matches_to_json(&matches),
        Err(MatchError::UnknownUser { id }) => Ok(error_types::unknown_user_json(id)),
        Err(e) => Err(e),
    }
}

/// Nearest users to free interest text.
pub fn text_matches(
    rt: &MatchRuntime,
    text: &str,
    top_n: Option<usize>,
) -> MatchResult<serde_json::Value> {
    let top_n = top_n.unwrap_or(rt.config.search.default_top_n);
    let matches = rt.matches_for_text(text, top_n)?;
    match_types::matches_to_json(&matches)
}
