//! Health binding.

use skillmatch_core::errors::MatchResult;

use crate::conversions::match_types;
use crate::runtime::MatchRuntime;

pub fn health(rt: &MatchRuntime) -> MatchResult<serde_json::Value> {
    match_types::to_json(&rt.health()?)
}
