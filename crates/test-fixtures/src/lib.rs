//! Test fixture loader for skillmatch golden scenarios.
//!
//! Scenarios pair a user directory with hand-placed vectors so search
//! order is known in advance. [`load_scenario`] seeds an in-memory
//! directory and a vector store from one.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use skillmatch_core::config::IndexMetric;
use skillmatch_core::models::UserRecord;
use skillmatch_index::VectorStore;
use skillmatch_storage::StorageEngine;

/// Root directory of the golden data.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// A directory plus the vectors to index, one per position.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioFile {
    pub description: String,
    pub metric: IndexMetric,
    pub dimensions: usize,
    pub users: Vec<UserRecord>,
    /// Ids stored in the index, in position order. Defaults to the user ids.
    #[serde(default)]
    pub index_ids: Option<Vec<i64>>,
    pub vectors: Vec<Vec<f32>>,
    #[serde(default)]
    pub expectations: serde_json::Value,
}

/// A seeded, ready-to-query scenario.
pub struct Scenario {
    pub file: ScenarioFile,
    pub storage: StorageEngine,
    pub store: VectorStore,
}

/// Seed an in-memory directory and a vector store from a scenario file.
///
/// # Panics
/// Panics on malformed fixtures.
pub fn load_scenario(relative_path: &str) -> Scenario {
    let file: ScenarioFile = load_fixture(relative_path);
    let storage = StorageEngine::open_in_memory().expect("open in-memory storage");
    storage.import_users(&file.users).expect("import fixture users");

    let ids = file
        .index_ids
        .clone()
        .unwrap_or_else(|| file.users.iter().map(|u| u.id).collect());
    let slab: Vec<f32> = file.vectors.iter().flatten().copied().collect();
    let store = VectorStore::from_parts(file.metric, file.dimensions, ids, slab)
        .expect("build fixture vector store");

    Scenario {
        file,
        storage,
        store,
    }
}

/// Records for ad-hoc tests.
pub fn user(id: i64, name: &str, profile: &str) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        city: "Lisbon".to_string(),
        date_of_birth: "1990-06-15".to_string(),
        profile_text: profile.to_string(),
        country: None,
        gender: None,
    }
}
