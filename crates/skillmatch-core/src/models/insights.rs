use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestCount {
    pub interest: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

/// Aggregate statistics over the whole directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsReport {
    pub total_users: usize,
    pub popular_interests: Vec<InterestCount>,
    /// Users per age in years.
    pub age_distribution: BTreeMap<u32, usize>,
    /// Users whose date of birth could not be parsed.
    pub unknown_ages: usize,
    pub top_cities: Vec<CityCount>,
}
