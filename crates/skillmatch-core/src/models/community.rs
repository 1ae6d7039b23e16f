use serde::{Deserialize, Serialize};

/// A user sharing a community with the queried user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityMember {
    pub user_id: i64,
    pub name: String,
}
