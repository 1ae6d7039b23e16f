//! Candidate pool sizing and the tag predicate for filtered search.

use std::collections::BTreeSet;

use skillmatch_core::config::SearchConfig;
use skillmatch_core::models::UserRecord;

/// How the filtered search sizes and consumes its candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPolicy {
    pub oversampling_factor: usize,
    /// Stop at the first `top_n` survivors instead of ranking the whole pool.
    pub stop_at_cap: bool,
    /// Widen the window when an unfiltered search comes back short.
    pub requery_when_short: bool,
}

impl FilterPolicy {
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            oversampling_factor: config.oversampling_factor.max(1),
            stop_at_cap: config.stop_at_cap,
            requery_when_short: config.requery_when_short,
        }
    }

    /// `top_n * oversampling_factor`, capped at the store size.
    pub fn pool_size(&self, top_n: usize, store_len: usize) -> usize {
        top_n
            .saturating_mul(self.oversampling_factor)
            .min(store_len)
    }
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

/// Caller-selected tags. Matching is exact and case-sensitive on
/// whitespace-delimited profile tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    tags: BTreeSet<String>,
}

impl TagFilter {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|t| t.as_ref().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tags }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Number of selected tags present in the profile. Repeats count once.
    pub fn overlap(&self, record: &UserRecord) -> usize {
        record
            .interest_set()
            .into_iter()
            .filter(|token| self.tags.contains(*token))
            .count()
    }

    pub fn matches(&self, record: &UserRecord) -> bool {
        record.interests().any(|token| self.tags.contains(token))
    }
}
