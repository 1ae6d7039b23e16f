/// skillmatch version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Magic bytes at the start of a persisted vector index file.
pub const INDEX_MAGIC: [u8; 4] = *b"SMVI";

/// Current on-disk index format version.
pub const INDEX_FORMAT_VERSION: u16 = 1;

/// Date format accepted for dates of birth.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Label returned when the classifier predicts a strong collaboration.
pub const LABEL_STRONG: &str = "Strong Collaboration Likely";

/// Label returned when the classifier predicts a weak collaboration.
pub const LABEL_WEAK: &str = "Weak Collaboration Likely";

/// Label returned when either user of a friendship prediction is unknown.
pub const LABEL_INVALID: &str = "Invalid users";

/// Words ignored when counting popular interests.
pub const INTEREST_STOPWORDS: &[&str] = &[
    "and", "or", "the", "a", "an", "in", "of", "on", "for", "to", "with", "by",
];
