//! Directory-wide statistics: popular interests, ages, cities.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use skillmatch_core::config::CommunityConfig;
use skillmatch_core::constants::INTEREST_STOPWORDS;
use skillmatch_core::models::{Age, CityCount, InsightsReport, InterestCount, UserRecord};

/// Aggregate the directory as of `today`.
///
/// Interest tokens are lowercased and stopwords dropped; every
/// occurrence counts. Ties rank alphabetically.
pub fn compute_insights(
    users: &[UserRecord],
    today: NaiveDate,
    config: &CommunityConfig,
) -> InsightsReport {
    let mut interests: HashMap<String, usize> = HashMap::new();
    let mut cities: HashMap<&str, usize> = HashMap::new();
    let mut age_distribution: BTreeMap<u32, usize> = BTreeMap::new();
    let mut unknown_ages = 0;

    for user in users {
        for token in user.interests() {
            let token = token.to_lowercase();
            if INTEREST_STOPWORDS.contains(&token.as_str()) {
                continue;
            }
            *interests.entry(token).or_default() += 1;
        }

        *cities.entry(user.city.as_str()).or_default() += 1;

        match Age::from_dob_on(&user.date_of_birth, today) {
            Age::Years(y) => *age_distribution.entry(y).or_default() += 1,
            Age::Unknown => unknown_ages += 1,
        }
    }

    let popular_interests = top_counts(interests, config.top_interests)
        .into_iter()
        .map(|(interest, count)| InterestCount { interest, count })
        .collect();
    let top_cities = top_counts(cities, config.top_cities)
        .into_iter()
        .map(|(city, count)| CityCount {
            city: city.to_string(),
            count,
        })
        .collect();

    InsightsReport {
        total_users: users.len(),
        popular_interests,
        age_distribution,
        unknown_ages,
        top_cities,
    }
}

fn top_counts<K: Ord>(counts: HashMap<K, usize>, limit: usize) -> Vec<(K, usize)> {
    let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}
