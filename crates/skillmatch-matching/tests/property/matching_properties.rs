use std::collections::BTreeSet;

use proptest::prelude::*;
use skillmatch_core::config::{IndexMetric, SearchConfig};
use skillmatch_core::errors::MatchError;
use skillmatch_index::VectorStore;
use skillmatch_matching::{SimilarityEngine, TagFilter};
use skillmatch_storage::StorageEngine;
use test_fixtures::user;

const VOCAB: &[&str] = &["music", "chess", "books", "travel", "yoga", "wine"];

fn scenario() -> impl Strategy<Value = (Vec<String>, Vec<[f32; 3]>)> {
    (2usize..24).prop_flat_map(|n| {
        (
            prop::collection::vec(
                prop::collection::btree_set(prop::sample::select(VOCAB), 1..4)
                    .prop_map(|s| s.into_iter().collect::<Vec<_>>().join(" ")),
                n,
            ),
            prop::collection::vec(prop::array::uniform3(-1.0f32..1.0), n),
        )
    })
}

fn seed(profiles: &[String], vectors: &[[f32; 3]]) -> (StorageEngine, VectorStore) {
    let storage = StorageEngine::open_in_memory().unwrap();
    let users: Vec<_> = profiles
        .iter()
        .enumerate()
        .map(|(i, p)| user(i as i64, &format!("u{i}"), p))
        .collect();
    storage.import_users(&users).unwrap();
    let ids = (0..profiles.len() as i64).collect();
    let slab = vectors.iter().flatten().copied().collect();
    let store = VectorStore::from_parts(IndexMetric::L2, 3, ids, slab).unwrap();
    (storage, store)
}

fn is_two_decimal(x: f64) -> bool {
    ((x * 100.0).round() / 100.0 - x).abs() < 1e-12
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn top_matches_never_contains_self(
        (profiles, vectors) in scenario(),
        pick in any::<prop::sample::Index>(),
        top_n in 0usize..30,
    ) {
        let (storage, store) = seed(&profiles, &vectors);
        let engine = SimilarityEngine::new(&store, &storage, &SearchConfig::default());
        let id = pick.index(profiles.len()) as i64;

        let results = engine.top_matches(id, top_n).unwrap();
        prop_assert!(results.iter().all(|m| m.user_id != id));
        prop_assert!(results.len() <= top_n);
        prop_assert_eq!(results.len(), top_n.min(profiles.len() - 1));
        for m in &results {
            prop_assert!(is_two_decimal(m.similarity_score));
        }
        for w in results.windows(2) {
            prop_assert!(w[0].similarity_score >= w[1].similarity_score);
        }
    }

    #[test]
    fn top_matches_is_idempotent(
        (profiles, vectors) in scenario(),
        pick in any::<prop::sample::Index>(),
        top_n in 1usize..10,
    ) {
        let (storage, store) = seed(&profiles, &vectors);
        let engine = SimilarityEngine::new(&store, &storage, &SearchConfig::default());
        let id = pick.index(profiles.len()) as i64;
        prop_assert_eq!(engine.top_matches(id, top_n).unwrap(), engine.top_matches(id, top_n).unwrap());
    }

    #[test]
    fn out_of_range_ids_are_unknown(
        (profiles, vectors) in scenario(),
        offset in 0i64..1000,
        negative in any::<bool>(),
    ) {
        let (storage, store) = seed(&profiles, &vectors);
        let engine = SimilarityEngine::new(&store, &storage, &SearchConfig::default());
        let id = if negative { -1 - offset } else { profiles.len() as i64 + offset };
        let is_unknown = matches!(
            engine.top_matches(id, 5),
            Err(MatchError::UnknownUser { .. })
        );
        prop_assert!(is_unknown);
    }

    #[test]
    fn filtered_results_share_a_tag_and_fit_the_cap(
        (profiles, vectors) in scenario(),
        pick in any::<prop::sample::Index>(),
        tags in prop::collection::btree_set(prop::sample::select(VOCAB), 1..3),
        top_n in 0usize..12,
        stop_at_cap in any::<bool>(),
    ) {
        let (storage, store) = seed(&profiles, &vectors);
        let config = SearchConfig { stop_at_cap, ..Default::default() };
        let engine = SimilarityEngine::new(&store, &storage, &config);
        let id = pick.index(profiles.len()) as i64;
        let filter = TagFilter::new(tags.iter().copied());

        let results = engine.filtered_matches(id, &filter, top_n).unwrap();
        prop_assert!(results.len() <= top_n);
        for m in &results {
            prop_assert!(m.user_id != id);
            let tokens: BTreeSet<&str> = m.profile_text.split_whitespace().collect();
            prop_assert!(tags.iter().any(|t| tokens.contains(t)));
            prop_assert!(is_two_decimal(m.similarity_score));
        }
    }
}
