use skillmatch_core::config::{IndexMetric, SearchConfig};
use skillmatch_index::VectorStore;
use skillmatch_matching::{SimilarityEngine, TagFilter};
use skillmatch_storage::StorageEngine;
use test_fixtures::user;

const USERS: i64 = 33_000;

/// More users than SQLite allows bind variables in one statement.
fn crowded() -> (StorageEngine, VectorStore) {
    let storage = StorageEngine::open_in_memory().unwrap();
    let records: Vec<_> = (0..USERS)
        .map(|id| user(id, &format!("user{id}"), "music travel"))
        .collect();
    storage.import_users(&records).unwrap();

    let ids: Vec<i64> = (0..USERS).collect();
    let slab: Vec<f32> = ids.iter().flat_map(|&id| [id as f32, 0.0]).collect();
    let store = VectorStore::from_parts(IndexMetric::L2, 2, ids, slab).unwrap();
    (storage, store)
}

fn no_deadline() -> SearchConfig {
    SearchConfig {
        query_timeout_ms: 0,
        ..Default::default()
    }
}

#[test]
fn top_matches_over_the_whole_directory() {
    let (storage, store) = crowded();
    let engine = SimilarityEngine::new(&store, &storage, &no_deadline());

    let results = engine.top_matches(0, (USERS - 1) as usize).unwrap();
    assert_eq!(results.len(), (USERS - 1) as usize);
    assert_eq!(results[0].user_id, 1);
    assert_eq!(results.last().unwrap().user_id, USERS - 1);
}

#[test]
fn filtered_pool_larger_than_the_bind_limit() {
    let (storage, store) = crowded();
    let engine = SimilarityEngine::new(&store, &storage, &no_deadline());

    let results = engine
        .filtered_matches(0, &TagFilter::new(["music"]), 7_000)
        .unwrap();
    assert_eq!(results.len(), 7_000);
    assert!(results.iter().all(|m| m.user_id != 0));
}
