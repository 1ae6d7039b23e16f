use std::fmt;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::DOB_FORMAT;

/// Age in whole years, or `Unknown` when the date of birth cannot be parsed.
///
/// Serializes as a number, or as the string `"unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Age {
    Years(u32),
    Unknown,
}

impl Age {
    /// Age on `today` for a `YYYY-MM-DD` date of birth.
    /// Malformed dates and dates after `today` give `Unknown`.
    pub fn from_dob_on(dob: &str, today: NaiveDate) -> Self {
        let Ok(birth) = NaiveDate::parse_from_str(dob.trim(), DOB_FORMAT) else {
            return Age::Unknown;
        };
        if birth > today {
            return Age::Unknown;
        }
        let mut years = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        u32::try_from(years).map(Age::Years).unwrap_or(Age::Unknown)
    }

    /// Age as of the current UTC date.
    pub fn from_dob(dob: &str) -> Self {
        Self::from_dob_on(dob, Utc::now().date_naive())
    }

    pub fn years(self) -> Option<u32> {
        match self {
            Age::Years(y) => Some(y),
            Age::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Age::Years(_))
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Age::Years(y) => write!(f, "{y}"),
            Age::Unknown => f.write_str("unknown"),
        }
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Age::Years(y) => serializer.serialize_u32(*y),
            Age::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Years(u32),
            Text(String),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Years(y) => Age::Years(y),
            Raw::Text(_) => Age::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn counts_full_years_only() {
        let today = day(2024, 6, 15);
        assert_eq!(Age::from_dob_on("2000-06-15", today), Age::Years(24));
        assert_eq!(Age::from_dob_on("2000-06-16", today), Age::Years(23));
    }

    #[test]
    fn malformed_dates_are_unknown() {
        let today = day(2024, 6, 15);
        assert_eq!(Age::from_dob_on("31-02-2020", today), Age::Unknown);
        assert_eq!(Age::from_dob_on("2020-02-31", today), Age::Unknown);
        assert_eq!(Age::from_dob_on("", today), Age::Unknown);
    }

    #[test]
    fn future_birth_is_unknown() {
        assert_eq!(Age::from_dob_on("2030-01-01", day(2024, 1, 1)), Age::Unknown);
    }

    #[test]
    fn serializes_unknown_as_marker() {
        assert_eq!(serde_json::to_string(&Age::Unknown).unwrap(), "\"unknown\"");
        assert_eq!(serde_json::to_string(&Age::Years(31)).unwrap(), "31");
    }
}
