//! Friendship bindings: predictFriendship, mutualInterests.

use skillmatch_core::errors::MatchResult;

use crate::conversions::match_types;
use crate::runtime::MatchRuntime;

/// `{"prediction": "<label>"}`; unknown ids give "Invalid users".
pub fn predict_friendship(rt: &MatchRuntime, a: i64, b: i64) -> MatchResult<serde_json::Value> {
    let prediction = rt.predict_friendship(a, b)?;
    Ok(match_types::prediction_to_json(prediction))
}

pub fn mutual_interests(rt: &MatchRuntime, a: i64, b: i64) -> MatchResult<serde_json::Value> {
    match_types::to_json(&rt.mutual_interests(a, b)?)
}
