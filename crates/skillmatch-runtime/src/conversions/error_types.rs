//! Error → JSON shapes the bindings hand back instead of failing.

use serde_json::json;

/// Body returned by `filtered_recommend` for an unknown query user.
pub fn unknown_user_json(id: i64) -> serde_json::Value {
    json!({
        "error": format!("UserID {id} not found."),
        "userId": id,
    })
}
