//! # skillmatch-core
//!
//! Shared vocabulary of the skillmatch recommender: user and match models,
//! the collaborator traits engines are written against, the `MatchError`
//! roll-up, and TOML configuration with its defaults.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::SkillmatchConfig;
pub use errors::{MatchError, MatchResult};
pub use models::{Age, Match, NewUser, UserRecord};
