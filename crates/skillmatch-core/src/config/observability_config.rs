use serde::{Deserialize, Serialize};

use super::defaults;

/// `[observability]`. `SKILLMATCH_LOG` overrides `log_level` when set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// An `EnvFilter` directive, e.g. `"info"` or `"skillmatch_matching=debug"`.
    pub log_level: String,
    /// JSON lines when true, human-readable otherwise.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.into(),
            json: defaults::DEFAULT_JSON_LOGS,
        }
    }
}
