use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Age;
use crate::errors::{MatchError, MatchResult};

/// One row of the user directory.
///
/// `profile_text` is a space-separated bag of interest tokens. Order is
/// irrelevant and tokens may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub city: String,
    /// `YYYY-MM-DD`, possibly malformed.
    pub date_of_birth: String,
    pub profile_text: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl UserRecord {
    /// Whitespace-delimited interest tokens, in profile order.
    pub fn interests(&self) -> impl Iterator<Item = &str> {
        self.profile_text.split_whitespace()
    }

    /// Distinct interest tokens.
    pub fn interest_set(&self) -> BTreeSet<&str> {
        self.interests().collect()
    }

    pub fn age(&self) -> Age {
        Age::from_dob(&self.date_of_birth)
    }
}

/// A profile to be inserted. The directory assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub date_of_birth: String,
    pub city: String,
    pub interests: Vec<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl NewUser {
    /// A profile needs a name and at least one non-blank interest.
    pub fn validate(&self) -> MatchResult<()> {
        if self.name.trim().is_empty() {
            return Err(MatchError::InvalidInput {
                reason: "name must not be empty".into(),
            });
        }
        if self.interests.iter().all(|i| i.trim().is_empty()) {
            return Err(MatchError::InvalidInput {
                reason: "at least one interest is required".into(),
            });
        }
        Ok(())
    }

    /// Interests joined by single spaces. Blank entries are dropped.
    pub fn profile_text(&self) -> String {
        self.interests
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Materialize into a record with the assigned id.
    pub fn into_record(self, id: i64) -> UserRecord {
        let profile_text = self.profile_text();
        UserRecord {
            id,
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            date_of_birth: self.date_of_birth,
            profile_text,
            country: self.country,
            gender: self.gender,
        }
    }
}
