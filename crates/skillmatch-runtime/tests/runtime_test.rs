use std::path::{Path, PathBuf};

use skillmatch_core::errors::MatchError;
use skillmatch_core::models::{HealthStatus, NewUser};
use skillmatch_core::traits::IUserDirectory;
use skillmatch_index::format;
use skillmatch_runtime::bindings::{community, friendship, health, profile, search};
use skillmatch_runtime::{MatchRuntime, RuntimeOptions};
use skillmatch_storage::StorageEngine;
use tempfile::TempDir;
use test_fixtures::load_scenario;

const TWO_DIM_CONFIG: &str = r#"
[embedding]
dimensions = 2
"#;

/// Seed a file-backed directory and index from a golden scenario.
fn seed_scenario(dir: &TempDir, scenario: &str) -> (PathBuf, PathBuf) {
    let s = load_scenario(scenario);
    let db_path = dir.path().join("users.db");
    let index_path = dir.path().join("users.index");

    let storage = StorageEngine::open(&db_path).unwrap();
    storage.import_users(&s.file.users).unwrap();
    format::save(&s.store, &index_path).unwrap();
    (db_path, index_path)
}

fn open(db_path: &Path, index_path: &Path, config: Option<&str>) -> Result<MatchRuntime, MatchError> {
    MatchRuntime::new(RuntimeOptions {
        db_path: Some(db_path.to_path_buf()),
        index_path: Some(index_path.to_path_buf()),
        config_toml: config.map(str::to_string),
        build_missing_index: false,
    })
}

fn new_user(name: &str, interests: &[&str]) -> NewUser {
    NewUser {
        name: name.to_string(),
        date_of_birth: "1994-04-04".to_string(),
        city: "Lisbon".to_string(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        country: Some("PT".to_string()),
        gender: None,
    }
}

fn ids(value: &serde_json::Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["user_id"].as_i64().unwrap())
        .collect()
}

#[test]
fn missing_index_is_fatal_without_build() {
    let dir = TempDir::new().unwrap();
    let err = open(&dir.path().join("users.db"), &dir.path().join("absent.index"), None)
        .err()
        .unwrap();
    assert!(matches!(err, MatchError::Configuration(_)));
    assert!(err.is_fatal());
}

#[test]
fn misaligned_index_is_fatal() {
    let dir = TempDir::new().unwrap();
    let (db, index) = seed_scenario(&dir, "golden/matching/stale_entries.json");

    let err = open(&db, &index, Some(TWO_DIM_CONFIG)).err().unwrap();
    assert!(matches!(err, MatchError::AlignmentViolation { .. }));
    assert!(err.is_fatal());
}

#[test]
fn index_dimensions_must_match_embedder() {
    let dir = TempDir::new().unwrap();
    let (db, index) = seed_scenario(&dir, "golden/matching/three_users.json");

    let err = open(&db, &index, None).err().unwrap();
    assert!(matches!(err, MatchError::Configuration(_)));
}

#[test]
fn corrupt_index_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let (db, index) = seed_scenario(&dir, "golden/matching/three_users.json");
    std::fs::write(&index, b"not an index").unwrap();

    let err = open(&db, &index, Some(TWO_DIM_CONFIG)).err().unwrap();
    assert!(err.is_fatal(), "unexpected error: {err}");
}

#[test]
fn bindings_return_observed_api_shapes() {
    let dir = TempDir::new().unwrap();
    let (db, index) = seed_scenario(&dir, "golden/matching/three_users.json");
    let rt = open(&db, &index, Some(TWO_DIM_CONFIG)).unwrap();

    let top = search::recommend(&rt, 0, Some(2)).unwrap();
    assert_eq!(ids(&top), vec![1, 2]);
    assert_eq!(top[0]["similarity_score"], 0.6);
    assert_eq!(top[1]["age"], "unknown");

    assert_eq!(search::recommend(&rt, 999, None).unwrap(), serde_json::json!([]));

    let filtered = search::filtered_recommend(&rt, 0, &["books".to_string()], None).unwrap();
    assert_eq!(ids(&filtered), vec![2]);

    let missing = search::filtered_recommend(&rt, 999, &["books".to_string()], None).unwrap();
    assert_eq!(missing["error"], "UserID 999 not found.");
    assert_eq!(missing["userId"], 999);

    // Ana and Ben share one of three distinct interests.
    let strong = friendship::predict_friendship(&rt, 0, 1).unwrap();
    assert_eq!(strong["prediction"], "Strong Collaboration Likely");
    let invalid = friendship::predict_friendship(&rt, 0, 999).unwrap();
    assert_eq!(invalid["prediction"], "Invalid users");

    let mutual = friendship::mutual_interests(&rt, 0, 1).unwrap();
    assert_eq!(mutual, serde_json::json!(["music"]));

    // Never clustered: each user is a community of one.
    let members = community::community(&rt, 0).unwrap();
    assert_eq!(members, serde_json::json!([{ "user_id": 0, "name": "Ana" }]));
    assert_eq!(community::community(&rt, 999).unwrap(), serde_json::json!([]));

    let insights = community::insights(&rt).unwrap();
    assert_eq!(insights["total_users"], 3);
}

#[test]
fn missing_index_is_built_when_requested() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("users.db");
    let index_path = dir.path().join("users.index");
    {
        let storage = StorageEngine::open(&db_path).unwrap();
        storage.create_user(new_user("Ana", &["rust", "sqlite"])).unwrap();
        storage.create_user(new_user("Ben", &["rust", "tokio"])).unwrap();
        storage.create_user(new_user("Caro", &["pottery", "yoga"])).unwrap();
    }

    let rt = MatchRuntime::new(RuntimeOptions {
        db_path: Some(db_path),
        index_path: Some(index_path.clone()),
        config_toml: None,
        build_missing_index: true,
    })
    .unwrap();

    assert!(index_path.exists());
    let report = rt.health().unwrap();
    assert_eq!(report.status, HealthStatus::Healthy);
    assert_eq!(report.index_vectors, 3);
    assert_eq!(report.dimensions, 384);

    let top = search::recommend(&rt, 0, Some(1)).unwrap();
    assert_eq!(ids(&top), vec![1]);

    let text = search::text_matches(&rt, "pottery yoga", Some(1)).unwrap();
    assert_eq!(ids(&text), vec![2]);
    assert_eq!(text[0]["similarity_score"], 1.0);

    assert!(matches!(
        rt.matches_for_text("   ", 3),
        Err(MatchError::InvalidInput { .. })
    ));
}

#[test]
fn new_profiles_become_searchable_after_rebuild() {
    let dir = TempDir::new().unwrap();
    let rt = MatchRuntime::new(RuntimeOptions {
        db_path: Some(dir.path().join("users.db")),
        index_path: Some(dir.path().join("users.index")),
        config_toml: None,
        build_missing_index: true,
    })
    .unwrap();
    assert_eq!(rt.health().unwrap().index_vectors, 0);

    let created = profile::create_profile(
        &rt,
        serde_json::json!({
            "name": "Dana",
            "date_of_birth": "1990-01-01",
            "city": "Oslo",
            "interests": ["chess", "music"]
        }),
    )
    .unwrap();
    assert_eq!(created["id"], 0);
    assert_eq!(created["profile_text"], "chess music");
    rt.create_profile(new_user("Eli", &["chess", "books"])).unwrap();

    let pending = rt.health().unwrap();
    assert_eq!(pending.status, HealthStatus::Degraded);
    assert_eq!(pending.pending_users, 2);
    assert_eq!(search::recommend(&rt, 0, None).unwrap(), serde_json::json!([]));

    let rebuilt = profile::rebuild_index(&rt).unwrap();
    assert_eq!(rebuilt["vectors"], 2);

    let report = health::health(&rt).unwrap();
    assert_eq!(report["status"], "healthy");
    assert_eq!(report["pending_users"], 0);
    assert_eq!(ids(&search::recommend(&rt, 0, None).unwrap()), vec![1]);

    // The rebuilt file reloads cleanly.
    let reloaded = format::load(rt.index_path()).unwrap();
    assert_eq!(reloaded.ids(), &[0, 1]);
}

#[test]
fn restart_before_rebuild_comes_up_degraded() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("users.db");
    let index_path = dir.path().join("users.index");
    {
        let storage = StorageEngine::open(&db_path).unwrap();
        storage.create_user(new_user("Ana", &["chess", "music"])).unwrap();
    }
    {
        let rt = MatchRuntime::new(RuntimeOptions {
            db_path: Some(db_path.clone()),
            index_path: Some(index_path.clone()),
            config_toml: None,
            build_missing_index: true,
        })
        .unwrap();
        rt.create_profile(new_user("Ben", &["chess", "books"])).unwrap();
        rt.create_profile(new_user("Caro", &["music", "yoga"])).unwrap();
        assert_eq!(rt.health().unwrap().status, HealthStatus::Degraded);
    }

    let rt = open(&db_path, &index_path, None).unwrap();
    let report = rt.health().unwrap();
    assert_eq!(report.status, HealthStatus::Degraded);
    assert_eq!(report.index_vectors, 1);
    assert_eq!(report.pending_users, 2);

    // Indexed users still search; unindexed ones are not there yet.
    assert!(rt.top_matches(0, 5).unwrap().is_empty());
    assert!(matches!(
        rt.top_matches(1, 5),
        Err(MatchError::UnknownUser { id: 1 })
    ));

    assert_eq!(rt.rebuild_index().unwrap(), 3);
    assert_eq!(rt.health().unwrap().status, HealthStatus::Healthy);
    assert_eq!(rt.top_matches(1, 5).unwrap().len(), 2);
}

#[test]
fn invalid_profiles_are_rejected() {
    let dir = TempDir::new().unwrap();
    let rt = MatchRuntime::new(RuntimeOptions {
        db_path: Some(dir.path().join("users.db")),
        index_path: Some(dir.path().join("users.index")),
        config_toml: None,
        build_missing_index: true,
    })
    .unwrap();

    let no_interests = profile::create_profile(
        &rt,
        serde_json::json!({
            "name": "Fay",
            "date_of_birth": "1990-01-01",
            "city": "Oslo",
            "interests": []
        }),
    );
    assert!(matches!(no_interests, Err(MatchError::InvalidInput { .. })));

    let malformed = profile::create_profile(&rt, serde_json::json!({ "name": "Gus" }));
    assert!(matches!(malformed, Err(MatchError::InvalidInput { .. })));
}

#[test]
fn bad_config_is_a_configuration_error() {
    let err = MatchRuntime::new(RuntimeOptions {
        config_toml: Some("[search\nbroken".to_string()),
        ..Default::default()
    })
    .err()
    .unwrap();
    assert!(matches!(err, MatchError::Configuration(_)));
}
