//! Profile bindings: createProfile, rebuildIndex.

use serde_json::json;
use skillmatch_core::errors::MatchResult;
use skillmatch_core::models::NewUser;

use crate::conversions::match_types;
use crate::runtime::MatchRuntime;

/// Create a profile from a `NewUser` payload and return the stored record.
pub fn create_profile(rt: &MatchRuntime, payload: serde_json::Value) -> MatchResult<serde_json::Value> {
    let user: NewUser = match_types::from_json(payload)?;
    let record = rt.create_profile(user)?;
    match_types::to_json(&record)
}

pub fn rebuild_index(rt: &MatchRuntime) -> MatchResult<serde_json::Value> {
    let vectors = rt.rebuild_index()?;
    Ok(json!({ "vectors": vectors }))
}
