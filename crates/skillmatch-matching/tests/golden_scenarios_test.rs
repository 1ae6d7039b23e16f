use skillmatch_core::config::SearchConfig;
use skillmatch_core::errors::MatchError;
use skillmatch_core::models::Age;
use skillmatch_matching::{FilterPolicy, SimilarityEngine, TagFilter};
use test_fixtures::load_scenario;

fn ids(matches: &[skillmatch_core::models::Match]) -> Vec<i64> {
    matches.iter().map(|m| m.user_id).collect()
}

#[test]
fn nearest_neighbors_exclude_self_in_distance_order() {
    let s = load_scenario("golden/matching/three_users.json");
    let engine = SimilarityEngine::new(&s.store, &s.storage, &SearchConfig::default());

    let results = engine.top_matches(0, 2).unwrap();
    assert_eq!(ids(&results), vec![1, 2]);
    assert_eq!(results[0].similarity_score, 0.6);
    assert_eq!(results[1].similarity_score, -1.0);
    assert_eq!(results[0].name, "Ben");
    assert_eq!(results[1].city, "Madrid");
}

#[test]
fn filter_keeps_only_tagged_profiles() {
    let s = load_scenario("golden/matching/three_users.json");
    let engine = SimilarityEngine::new(&s.store, &s.storage, &SearchConfig::default());

    let results = engine
        .filtered_matches(0, &TagFilter::new(["books"]), 5)
        .unwrap();
    assert_eq!(ids(&results), vec![2]);
    assert_eq!(results[0].similarity_score, -1.0);
}

#[test]
fn unknown_user_is_the_same_error_on_both_paths() {
    let s = load_scenario("golden/matching/three_users.json");
    let engine = SimilarityEngine::new(&s.store, &s.storage, &SearchConfig::default());

    assert!(matches!(
        engine.top_matches(999, 5),
        Err(MatchError::UnknownUser { id: 999 })
    ));
    assert!(matches!(
        engine.filtered_matches(999, &TagFilter::new(["music"]), 5),
        Err(MatchError::UnknownUser { id: 999 })
    ));
}

#[test]
fn malformed_date_resolves_to_unknown_age() {
    let s = load_scenario("golden/matching/three_users.json");
    let engine = SimilarityEngine::new(&s.store, &s.storage, &SearchConfig::default());

    let results = engine.top_matches(1, 2).unwrap();
    let caro = results.iter().find(|m| m.user_id == 2).unwrap();
    assert_eq!(caro.age, Age::Unknown);
    assert_eq!(serde_json::to_value(caro).unwrap()["age"], "unknown");
}

#[test]
fn empty_tag_set_matches_nothing() {
    let s = load_scenario("golden/matching/three_users.json");
    let engine = SimilarityEngine::new(&s.store, &s.storage, &SearchConfig::default());
    let none: [&str; 0] = [];
    assert!(engine
        .filtered_matches(0, &TagFilter::new(none), 5)
        .unwrap()
        .is_empty());
}

#[test]
fn result_is_capped_when_self_is_not_in_window() {
    let s = load_scenario("golden/matching/tied_vectors.json");
    let engine = SimilarityEngine::new(&s.store, &s.storage, &SearchConfig::default());

    let results = engine.top_matches(2, 1).unwrap();
    assert_eq!(ids(&results), vec![0]);
}

#[test]
fn stale_entries_are_skipped_and_window_widened() {
    let s = load_scenario("golden/matching/stale_entries.json");
    let engine = SimilarityEngine::new(&s.store, &s.storage, &SearchConfig::default());

    assert_eq!(ids(&engine.top_matches(0, 1).unwrap()), vec![1]);
    assert_eq!(ids(&engine.top_matches(0, 3).unwrap()), vec![1, 2]);
}

#[test]
fn stop_at_cap_takes_first_survivors() {
    let s = load_scenario("golden/matching/filtered_ranking.json");
    let engine = SimilarityEngine::new(&s.store, &s.storage, &SearchConfig::default());
    let tags = TagFilter::new(["music", "chess", "books"]);

    assert_eq!(ids(&engine.filtered_matches(0, &tags, 2).unwrap()), vec![1, 3]);
}

#[test]
fn full_pool_ranks_by_overlap() {
    let s = load_scenario("golden/matching/filtered_ranking.json");
    let engine = SimilarityEngine::new(&s.store, &s.storage, &SearchConfig::default())
        .with_policy(FilterPolicy {
            stop_at_cap: false,
            ..FilterPolicy::default()
        });
    let tags = TagFilter::new(["music", "chess", "books"]);

    assert_eq!(ids(&engine.filtered_matches(0, &tags, 2).unwrap()), vec![4, 5]);
    // Equal overlap keeps distance order.
    assert_eq!(
        ids(&engine.filtered_matches(0, &tags, 4).unwrap()),
        vec![4, 5, 1, 3]
    );
}

#[test]
fn small_oversampling_limits_recall() {
    let s = load_scenario("golden/matching/filtered_ranking.json");
    let config = SearchConfig {
        oversampling_factor: 1,
        ..Default::default()
    };
    let engine = SimilarityEngine::new(&s.store, &s.storage, &config);
    // Pool of 2 is [self, Near]: only Near survives.
    let results = engine
        .filtered_matches(0, &TagFilter::new(["music", "chess"]), 2)
        .unwrap();
    assert_eq!(ids(&results), vec![1]);
}
