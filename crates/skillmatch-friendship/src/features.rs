//! Pair features.

use chrono::NaiveDate;
use skillmatch_core::models::{Age, FriendshipFeatures, UserRecord};
use skillmatch_observability::events;

/// `|A ∩ B| / |A ∪ B|` over distinct interest tokens. 0 when both are empty.
pub fn jaccard(a: &UserRecord, b: &UserRecord) -> f64 {
    let sa = a.interest_set();
    let sb = b.interest_set();
    let union = sa.union(&sb).count();
    if union == 0 {
        return 0.0;
    }
    sa.intersection(&sb).count() as f64 / union as f64
}

/// Interests both users list, sorted.
pub fn mutual_interests(a: &UserRecord, b: &UserRecord) -> Vec<String> {
    let sb = b.interest_set();
    a.interest_set()
        .intersection(&sb)
        .map(|s| s.to_string())
        .collect()
}

/// Compute the classifier features for a pair as of `today`.
///
/// An unparseable date of birth makes the age gap 0, the neutral value.
pub fn compute_features(a: &UserRecord, b: &UserRecord, today: NaiveDate) -> FriendshipFeatures {
    let age_a = Age::from_dob_on(&a.date_of_birth, today);
    let age_b = Age::from_dob_on(&b.date_of_birth, today);
    for (user, age) in [(a, age_a), (b, age_b)] {
        if !age.is_known() {
            events::malformed_date(user.id, &user.date_of_birth);
        }
    }
    let age_gap = match (age_a.years(), age_b.years()) {
        (Some(x), Some(y)) => x.abs_diff(y) as f64,
        _ => 0.0,
    };

    FriendshipFeatures {
        jaccard: jaccard(a, b),
        age_gap,
        same_country: same_field(&a.country, &b.country),
        same_gender: same_field(&a.gender, &b.gender),
    }
}

/// Both present and equal ignoring case.
fn same_field(a: &Option<String>, b: &Option<String>) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => x.trim().eq_ignore_ascii_case(y.trim()),
        _ => false,
    }
}
