//! Model → serde_json::Value conversions.
//!
//! Every model derives Serialize, so these stay thin wrappers that give
//! serialization failures a consistent error.

use serde::de::DeserializeOwned;
use serde::Serialize;

use skillmatch_core::errors::{MatchError, MatchResult};
use skillmatch_core::models::{FriendshipPrediction, Match};

/// Serialize any model to a JSON value.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> MatchResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| MatchError::Serialization(format!("failed to serialize result: {e}")))
}

/// Deserialize a request payload. Shape errors are the caller's fault.
pub fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> MatchResult<T> {
    serde_json::from_value(value).map_err(|e| MatchError::InvalidInput {
        reason: format!("malformed request: {e}"),
    })
}

pub fn matches_to_json(matches: &[Match]) -> MatchResult<serde_json::Value> {
    to_json(matches)
}

/// `{"prediction": "<label>"}`
pub fn prediction_to_json(prediction: FriendshipPrediction) -> serde_json::Value {
    serde_json::json!({ "prediction": prediction.label() })
}
