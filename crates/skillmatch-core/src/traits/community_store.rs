use crate::errors::MatchResult;
use crate::models::CommunityMember;

/// Persisted user → community assignments.
pub trait ICommunityStore: Send + Sync {
    /// Replace every assignment with `(user_id, community_id)` pairs.
    fn replace_communities(&self, assignments: &[(i64, i64)]) -> MatchResult<usize>;

    fn community_of(&self, user_id: i64) -> MatchResult<Option<i64>>;

    /// Members of a community, ordered by user id.
    fn community_members(&self, community_id: i64) -> MatchResult<Vec<CommunityMember>>;
}
