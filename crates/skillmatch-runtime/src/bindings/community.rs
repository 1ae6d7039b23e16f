//! Community bindings: community, recluster, insights.

use serde_json::json;
use skillmatch_core::errors::{MatchError, MatchResult};

use crate::conversions::match_types;
use crate::runtime::MatchRuntime;

/// `{user_id, name}` of everyone in `user_id`'s community. Unknown user gives `[]`.
pub fn community(rt: &MatchRuntime, user_id: i64) -> MatchResult<serde_json::Value> {
    match rt.community(user_id) {
        Ok(members) => match_types::to_json(&members),
        Err(MatchError::UnknownUser { .. }) => Ok(serde_json::Value::Array(Vec::new())),
        Err(e) => Err(e),
    }
}

pub fn recluster(rt: &MatchRuntime) -> MatchResult<serde_json::Value> {
    let communities = rt.recluster()?;
    Ok(json!({ "communities": communities }))
}

pub fn insights(rt: &MatchRuntime) -> MatchResult<serde_json::Value> {
    match_types::to_json(&rt.insights()?)
}
