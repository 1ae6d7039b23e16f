//! File-backed mode: reads go through the read-only pool.

use skillmatch_core::models::NewUser;
use skillmatch_core::traits::IUserDirectory;
use skillmatch_core::config::StorageConfig;
use skillmatch_storage::pool::pragmas::{cache_size, verify_wal_mode};
use skillmatch_storage::StorageEngine;

fn profile(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        date_of_birth: "1988-11-30".to_string(),
        city: "Oslo".to_string(),
        interests: vec!["hiking".to_string()],
        country: Some("NO".to_string()),
        gender: None,
    }
}

#[test]
fn users_survive_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("users.db");

    {
        let engine = StorageEngine::open(&db_path).expect("open");
        engine.create_user(profile("first")).unwrap();
        engine.create_user(profile("second")).unwrap();
    }

    let engine = StorageEngine::open(&db_path).expect("reopen");
    let users = engine.list_users().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].name, "second");
    assert_eq!(users[1].country.as_deref(), Some("NO"));
}

#[test]
fn read_pool_sees_committed_writes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let engine = StorageEngine::open(&dir.path().join("users.db")).expect("open");
    for i in 0..5 {
        engine.create_user(profile(&format!("user-{i}"))).unwrap();
    }
    // Round-robin over every reader.
    for _ in 0..engine.pool().reader_count() {
        assert_eq!(engine.count_users().unwrap(), 5);
    }
}

#[test]
fn writer_runs_in_wal_mode() {
    let dir = tempfile::tempdir().expect("tempdir");
    let engine = StorageEngine::open(&dir.path().join("wal.db")).expect("open");
    let wal = engine
        .pool()
        .writer
        .with_conn(verify_wal_mode)
        .unwrap();
    assert!(wal);
}

#[test]
fn storage_config_reaches_every_connection() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = StorageConfig {
        cache_size: -2_000,
        read_pool_size: 2,
        ..Default::default()
    };
    let engine = StorageEngine::open_at(&dir.path().join("tuned.db"), &config).expect("open");
    let pool = engine.pool();
    assert_eq!(pool.reader_count(), 2);
    assert_eq!(pool.writer.with_conn(cache_size).unwrap(), -2_000);
    assert_eq!(pool.with_reader(cache_size).unwrap(), -2_000);
}

#[test]
fn oversized_read_pool_is_clamped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = StorageConfig {
        read_pool_size: 64,
        ..Default::default()
    };
    let engine = StorageEngine::open_at(&dir.path().join("big.db"), &config).expect("open");
    assert_eq!(
        engine.pool().reader_count(),
        skillmatch_storage::pool::read_pool::MAX_READERS
    );
}

#[test]
fn writer_recovers_after_a_panicking_caller() {
    let dir = tempfile::tempdir().expect("tempdir");
    let engine = StorageEngine::open(&dir.path().join("poison.db")).expect("open");
    engine.create_user(profile("before")).unwrap();

    let writer = &engine.pool().writer;
    let crashed = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        writer
            .with_conn(|conn| -> skillmatch_core::errors::MatchResult<()> {
                conn.execute_batch("BEGIN; DELETE FROM users;").unwrap();
                panic!("caller failed mid-transaction");
            })
            .unwrap();
    }));
    assert!(crashed.is_err());

    // The half-done delete is gone and the writer still serves inserts.
    engine.create_user(profile("after")).unwrap();
    assert_eq!(engine.count_users().unwrap(), 2);
}
