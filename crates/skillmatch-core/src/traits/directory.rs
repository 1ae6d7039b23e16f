use crate::errors::MatchResult;
use crate::models::{NewUser, UserRecord};

/// Ordered user collection, addressable by id.
///
/// `list_users` returns rows ordered by id; that ordering is the one the
/// vector store positions refer to.
pub trait IUserDirectory: Send + Sync {
    fn get_user(&self, id: i64) -> MatchResult<Option<UserRecord>>;

    /// Fetch several users. Missing ids are skipped; output follows id order.
    fn get_users(&self, ids: &[i64]) -> MatchResult<Vec<UserRecord>>;

    fn list_users(&self) -> MatchResult<Vec<UserRecord>>;

    fn count_users(&self) -> MatchResult<usize>;

    /// Insert a profile under the next dense id.
    fn create_user(&self, user: NewUser) -> MatchResult<UserRecord>;
}
