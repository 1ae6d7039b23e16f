//! SimilarityEngine: k-NN search joined against the user directory.
//!
//! Positions returned by the store are translated to user ids through
//! the store's own id map, then batch-fetched from the directory.
//! Positions that no longer resolve are skipped and logged.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use skillmatch_core::config::SearchConfig;
use skillmatch_core::errors::{IndexError, MatchError, MatchResult};
use skillmatch_core::models::{Age, Match, UserRecord};
use skillmatch_core::traits::{IEmbeddingProvider, IUserDirectory, IVectorStore, Neighbors};
use skillmatch_observability::events;
use tracing::debug;

use crate::filter::{FilterPolicy, TagFilter};
use crate::score::ScoreTransform;

/// A resolved neighbor: directory row plus its own distance.
struct Candidate {
    record: UserRecord,
    distance: f32,
}

/// The similarity search engine.
///
/// Borrows one store snapshot and the directory for its lifetime; both
/// are only read.
pub struct SimilarityEngine<'a> {
    store: &'a dyn IVectorStore,
    directory: &'a dyn IUserDirectory,
    embedder: Option<&'a dyn IEmbeddingProvider>,
    transform: ScoreTransform,
    policy: FilterPolicy,
    timeout: Option<Duration>,
}

impl<'a> SimilarityEngine<'a> {
    pub fn new(
        store: &'a dyn IVectorStore,
        directory: &'a dyn IUserDirectory,
        config: &SearchConfig,
    ) -> Self {
        Self {
            store,
            directory,
            embedder: None,
            transform: config.score_transform.into(),
            policy: FilterPolicy::from_config(config),
            timeout: (config.query_timeout_ms > 0)
                .then(|| Duration::from_millis(config.query_timeout_ms)),
        }
    }

    /// Enable [`matches_for_text`](Self::matches_for_text).
    pub fn with_embedder(mut self, embedder: &'a dyn IEmbeddingProvider) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn with_transform(mut self, transform: ScoreTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_policy(mut self, policy: FilterPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The `top_n` nearest users to `user_id`, never including `user_id`.
    ///
    /// Fails with `UnknownUser` when the id has no vector or no directory
    /// row. Short windows are widened and re-queried when the policy allows.
    pub fn top_matches(&self, user_id: i64, top_n: usize) -> MatchResult<Vec<Match>> {
        let _span = skillmatch_observability::search_span!(user_id, top_n).entered();
        let started = Instant::now();
        let position = self.resolve_query(user_id)?;
        if top_n == 0 {
            return Ok(Vec::new());
        }

        let query = self.query_vector(position)?;
        let deadline = self.deadline();
        let store_len = self.store.len();
        let mut window = top_n.saturating_add(1).min(store_len);

        loop {
            let neighbors = self.store.knn_with_deadline(query, window, deadline)?;
            let candidates = self.resolve(&neighbors, Some(position))?;
            let short = candidates.len() < top_n;

            if short && self.policy.requery_when_short && window < store_len {
                window = window.saturating_mul(2).min(store_len);
                debug!(user_id, window, "short result window, re-querying");
                continue;
            }

            let results: Vec<Match> = candidates
                .into_iter()
                .take(top_n)
                .map(|c| self.to_match(c))
                .collect();
            events::search_completed(
                "top_matches",
                user_id,
                results.len(),
                window,
                started.elapsed().as_millis(),
            );
            return Ok(results);
        }
    }

    /// Nearest users to `user_id` whose profiles share at least one tag.
    ///
    /// Scans an oversampled pool in distance order. With `stop_at_cap` the
    /// scan ends at `top_n` survivors; otherwise every survivor is ranked
    /// by tag overlap (ties keep distance order) and the list truncated.
    pub fn filtered_matches(
        &self,
        user_id: i64,
        tags: &TagFilter,
        top_n: usize,
    ) -> MatchResult<Vec<Match>> {
        let _span =
            skillmatch_observability::filtered_search_span!(user_id, top_n, tags.len()).entered();
        let started = Instant::now();
        let position = self.resolve_query(user_id)?;
        if top_n == 0 || tags.is_empty() {
            return Ok(Vec::new());
        }

        let query = self.query_vector(position)?;
        let pool = self.policy.pool_size(top_n, self.store.len());
        let neighbors = self.store.knn_with_deadline(query, pool, self.deadline())?;
        let candidates = self.resolve(&neighbors, Some(position))?;

        let mut survivors: Vec<(Candidate, usize)> = Vec::new();
        for candidate in candidates {
            if !tags.matches(&candidate.record) {
                continue;
            }
            // Overlap only orders the full-pool ranking.
            let overlap = if self.policy.stop_at_cap {
                0
            } else {
                tags.overlap(&candidate.record)
            };
            survivors.push((candidate, overlap));
            if self.policy.stop_at_cap && survivors.len() >= top_n {
                break;
            }
        }

        if !self.policy.stop_at_cap {
            survivors.sort_by(|a, b| b.1.cmp(&a.1));
            survivors.truncate(top_n);
        }

        let results: Vec<Match> = survivors
            .into_iter()
            .map(|(c, _)| self.to_match(c))
            .collect();
        events::search_completed(
            "filtered_matches",
            user_id,
            results.len(),
            pool,
            started.elapsed().as_millis(),
        );
        Ok(results)
    }

    /// The `top_n` users nearest to free interest text.
    pub fn matches_for_text(&self, text: &str, top_n: usize) -> MatchResult<Vec<Match>> {
        let embedder = self.embedder.ok_or_else(|| {
            MatchError::Configuration("text search requires an embedding provider".into())
        })?;
        if text.trim().is_empty() {
            return Err(MatchError::InvalidInput {
                reason: "interest text must not be empty".into(),
            });
        }
        if top_n == 0 {
            return Ok(Vec::new());
        }

        let query = embedder.embed(text)?;
        let deadline = self.deadline();
        let store_len = self.store.len();
        let mut window = top_n.min(store_len);

        loop {
            let neighbors = self.store.knn_with_deadline(&query, window, deadline)?;
            let candidates = self.resolve(&neighbors, None)?;
            if candidates.len() < top_n && self.policy.requery_when_short && window < store_len {
                window = window.saturating_mul(2).min(store_len);
                continue;
            }
            return Ok(candidates
                .into_iter()
                .take(top_n)
                .map(|c| self.to_match(c))
                .collect());
        }
    }

    /// Position of the query user. Both the vector and the directory row
    /// must exist.
    fn resolve_query(&self, user_id: i64) -> MatchResult<usize> {
        let unknown = || MatchError::UnknownUser { id: user_id };
        if user_id < 0 {
            return Err(unknown());
        }
        let position = self.store.position_of(user_id).ok_or_else(unknown)?;
        if self.directory.get_user(user_id)?.is_none() {
            return Err(unknown());
        }
        Ok(position)
    }

    fn query_vector(&self, position: usize) -> MatchResult<&'a [f32]> {
        let store: &'a dyn IVectorStore = self.store;
        store.vector(position).ok_or_else(|| {
            IndexError::PositionOutOfRange {
                position,
                count: store.len(),
            }
            .into()
        })
    }

    fn deadline(&self) -> Option<Instant> {
        self.timeout.map(|t| Instant::now() + t)
    }

    /// Join a neighbor window against the directory, in distance order.
    /// `exclude` drops the query's own position wherever it ranks.
    fn resolve(&self, neighbors: &Neighbors, exclude: Option<usize>) -> MatchResult<Vec<Candidate>> {
        let mut wanted: Vec<(usize, i64, f32)> = Vec::with_capacity(neighbors.len());
        for (position, distance) in neighbors.pairs() {
            if Some(position) == exclude {
                continue;
            }
            match self.store.user_id_at(position) {
                Some(id) => wanted.push((position, id, distance)),
                None => events::stale_index_entry(position, None, "position out of range"),
            }
        }

        let ids: Vec<i64> = wanted.iter().map(|(_, id, _)| *id).collect();
        let mut rows: HashMap<i64, UserRecord> = self
            .directory
            .get_users(&ids)?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let mut out = Vec::with_capacity(wanted.len());
        for (position, id, distance) in wanted {
            match rows.remove(&id) {
                Some(record) => out.push(Candidate { record, distance }),
                None => events::stale_index_entry(position, Some(id), "missing from directory"),
            }
        }
        Ok(out)
    }

    fn to_match(&self, candidate: Candidate) -> Match {
        let record = candidate.record;
        let age = Age::from_dob(&record.date_of_birth);
        if !age.is_known() {
            events::malformed_date(record.id, &record.date_of_birth);
        }
        Match {
            user_id: record.id,
            similarity_score: self.transform.apply(candidate.distance),
            age,
            name: record.name,
            city: record.city,
            profile_text: record.profile_text,
        }
    }
}
