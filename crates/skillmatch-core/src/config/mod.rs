//! TOML configuration. Every section falls back to [`defaults`].

pub mod community_config;
pub mod defaults;
pub mod embedding_config;
pub mod friendship_config;
pub mod index_config;
pub mod observability_config;
pub mod search_config;
pub mod storage_config;

use serde::{Deserialize, Serialize};

pub use community_config::CommunityConfig;
pub use embedding_config::EmbeddingConfig;
pub use friendship_config::FriendshipConfig;
pub use index_config::{IndexConfig, IndexMetric};
pub use observability_config::ObservabilityConfig;
pub use search_config::{ScoreTransformKind, SearchConfig};
pub use storage_config::StorageConfig;

/// Top-level configuration aggregating every subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillmatchConfig {
    pub storage: StorageConfig,
    pub embedding: EmbeddingConfig,
    pub index: IndexConfig,
    pub search: SearchConfig,
    pub community: CommunityConfig,
    pub friendship: FriendshipConfig,
    pub observability: ObservabilityConfig,
}

impl SkillmatchConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
