//! StorageEngine: owns the ConnectionPool, implements IUserDirectory,
//! and exposes community-assignment persistence.

use std::path::Path;

use skillmatch_core::config::StorageConfig;
use skillmatch_core::errors::MatchResult;
use skillmatch_core::models::{CommunityMember, NewUser, UserRecord};
use skillmatch_core::traits::{ICommunityStore, IUserDirectory};
use tracing::{debug, info};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{community_ops, user_crud};

/// The user directory. Profile writes serialize on the single writer;
/// searches read through the pool and never wait on it.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a file-backed directory with default tuning.
    pub fn open(path: &Path) -> MatchResult<Self> {
        Self::open_at(path, &StorageConfig::default())
    }

    /// Open the database named by `config.db_path`.
    pub fn open_with_config(config: &StorageConfig) -> MatchResult<Self> {
        Self::open_at(Path::new(&config.db_path), config)
    }

    /// Open `path`, taking pool size and pragmas from `config`.
    pub fn open_at(path: &Path, config: &StorageConfig) -> MatchResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open(path, config)?,
        };
        engine.migrate()?;
        info!(
            path = %path.display(),
            readers = engine.pool.reader_count(),
            "user directory opened"
        );
        Ok(engine)
    }

    /// A private in-memory directory. Reads share the writer connection.
    pub fn open_in_memory() -> MatchResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory(&StorageConfig::default())?,
        };
        engine.migrate()?;
        Ok(engine)
    }

    fn migrate(&self) -> MatchResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    fn with_reader<F, T>(&self, f: F) -> MatchResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> MatchResult<T>,
    {
        self.pool.with_reader(f)
    }

    /// Insert pre-built records keeping their ids (dataset import).
    pub fn import_users(&self, records: &[UserRecord]) -> MatchResult<usize> {
        let inserted = self
            .pool
            .writer
            .with_conn(|conn| user_crud::bulk_insert(conn, records))?;
        info!(inserted, "imported users");
        Ok(inserted)
    }

    pub fn schema_version(&self) -> MatchResult<u32> {
        self.with_reader(migrations::current_version)
    }
}

impl IUserDirectory for StorageEngine {
    fn get_user(&self, id: i64) -> MatchResult<Option<UserRecord>> {
        self.with_reader(|conn| user_crud::get_user(conn, id))
    }

    fn get_users(&self, ids: &[i64]) -> MatchResult<Vec<UserRecord>> {
        self.with_reader(|conn| user_crud::get_users(conn, ids))
    }

    fn list_users(&self) -> MatchResult<Vec<UserRecord>> {
        self.with_reader(user_crud::list_users)
    }

    fn count_users(&self) -> MatchResult<usize> {
        self.with_reader(user_crud::count_users)
    }

    fn create_user(&self, user: NewUser) -> MatchResult<UserRecord> {
        let record = self
            .pool
            .writer
            .with_conn(|conn| user_crud::insert_user(conn, user))?;
        debug!(user_id = record.id, "user inserted");
        Ok(record)
    }
}

impl ICommunityStore for StorageEngine {
    fn replace_communities(&self, assignments: &[(i64, i64)]) -> MatchResult<usize> {
        let written = self
            .pool
            .writer
            .with_conn(|conn| community_ops::replace_assignments(conn, assignments))?;
        debug!(written, "community assignments replaced");
        Ok(written)
    }

    fn community_of(&self, user_id: i64) -> MatchResult<Option<i64>> {
        self.with_reader(|conn| community_ops::get_community(conn, user_id))
    }

    fn community_members(&self, community_id: i64) -> MatchResult<Vec<CommunityMember>> {
        self.with_reader(|conn| community_ops::community_members(conn, community_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, profile: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            date_of_birth: "1990-01-01".to_string(),
            city: "Porto".to_string(),
            interests: profile.split_whitespace().map(String::from).collect(),
            country: None,
            gender: None,
        }
    }

    #[test]
    fn ids_are_dense_from_zero() {
        let engine = StorageEngine::open_in_memory().unwrap();
        let a = engine.create_user(new_user("a", "music")).unwrap();
        let b = engine.create_user(new_user("b", "chess")).unwrap();
        assert_eq!(a.id, 0);
        assert_eq!(b.id, 1);
        assert_eq!(engine.count_users().unwrap(), 2);
    }

    #[test]
    fn schema_is_at_latest_version() {
        let engine = StorageEngine::open_in_memory().unwrap();
        assert_eq!(engine.schema_version().unwrap(), migrations::LATEST_VERSION);
    }

    #[test]
    fn invalid_profile_is_rejected_without_insert() {
        let engine = StorageEngine::open_in_memory().unwrap();
        assert!(engine.create_user(new_user("", "music")).is_err());
        assert_eq!(engine.count_users().unwrap(), 0);
    }
}
