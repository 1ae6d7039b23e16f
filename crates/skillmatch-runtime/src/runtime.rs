//! MatchRuntime: owns storage, embeddings, the index snapshot, and config.
//!
//! The index snapshot is an `Arc<VectorStore>` behind a `RwLock`. Searches
//! clone the `Arc` and run without holding the lock; a rebuild swaps in a
//! new snapshot while in-flight searches finish on the old one.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};
use std::time::Instant;

use skillmatch_community::CommunityEngine;
use skillmatch_core::config::SkillmatchConfig;
use skillmatch_core::errors::{MatchError, MatchResult};
use skillmatch_core::models::{
    CommunityMember, FriendshipPrediction, HealthReport, HealthStatus, InsightsReport, Match,
    NewUser, UserRecord,
};
use skillmatch_core::traits::{IEmbeddingProvider, IUserDirectory, IVectorStore};
use skillmatch_embeddings::EmbeddingEngine;
use skillmatch_friendship::{FriendshipEngine, LogisticClassifier};
use skillmatch_index::{format, IndexBuilder, VectorStore};
use skillmatch_matching::{SimilarityEngine, TagFilter};
use skillmatch_observability::events;
use skillmatch_storage::StorageEngine;
use tracing::{info, warn};

/// Global singleton for hosts that want one process-wide runtime.
static RUNTIME: OnceLock<Arc<MatchRuntime>> = OnceLock::new();

/// Options for initializing the runtime.
#[derive(Debug, Default, Clone)]
pub struct RuntimeOptions {
    /// Path to the SQLite database. If None, uses in-memory.
    pub db_path: Option<PathBuf>,
    /// Path to the index file. If None, uses `index.index_path` from config.
    pub index_path: Option<PathBuf>,
    /// TOML configuration string. If None, uses defaults.
    pub config_toml: Option<String>,
    /// Build and save the index when the file is missing instead of failing.
    pub build_missing_index: bool,
}

/// The central runtime owning all skillmatch engines.
pub struct MatchRuntime {
    pub storage: StorageEngine,
    pub embeddings: EmbeddingEngine,
    pub classifier: LogisticClassifier,
    pub config: SkillmatchConfig,
    snapshot: RwLock<Arc<VectorStore>>,
    index_path: PathBuf,
    rebuild_lock: Mutex<()>,
}

impl MatchRuntime {
    /// Open storage, load and validate the index.
    ///
    /// Every failure here is fatal. The one tolerated mismatch is a
    /// directory that extends the index with profiles created since the
    /// last rebuild: the runtime starts, those profiles are not yet
    /// searchable, and [`health`](Self::health) reports `Degraded`.
    pub fn new(opts: RuntimeOptions) -> MatchResult<Self> {
        let config = parse_config(&opts)?;

        let storage = match &opts.db_path {
            Some(path) => StorageEngine::open_at(path, &config.storage)?,
            None => StorageEngine::open_in_memory()?,
        };
        let embeddings = EmbeddingEngine::new(config.embedding.clone())?;
        let classifier = LogisticClassifier::from_config(&config.friendship);

        let index_path = opts
            .index_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.index.index_path));
        let store = load_or_build(&index_path, &storage, &embeddings, &config, opts.build_missing_index)?;

        if store.dimensions() != embeddings.dimensions() {
            return Err(MatchError::Configuration(format!(
                "index has {}-d vectors but the embedding provider produces {}-d",
                store.dimensions(),
                embeddings.dimensions()
            )));
        }
        let pending = store.pending_users(&storage)?;
        if pending > 0 {
            warn!(
                pending,
                index = %index_path.display(),
                "directory has profiles the index does not cover; rebuild to make them searchable"
            );
        }
        events::index_loaded(
            &index_path.display().to_string(),
            store.len(),
            store.dimensions(),
            store.metric().as_str(),
        );

        Ok(Self {
            storage,
            embeddings,
            classifier,
            config,
            snapshot: RwLock::new(Arc::new(store)),
            index_path,
            rebuild_lock: Mutex::new(()),
        })
    }

    /// Current index snapshot.
    pub fn snapshot(&self) -> Arc<VectorStore> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn top_matches(&self, user_id: i64, top_n: usize) -> MatchResult<Vec<Match>> {
        let store = self.snapshot();
        SimilarityEngine::new(store.as_ref(), &self.storage, &self.config.search)
            .top_matches(user_id, top_n)
    }

    pub fn filtered_matches(
        &self,
        user_id: i64,
        tags: &[String],
        top_n: usize,
    ) -> MatchResult<Vec<Match>> {
        let store = self.snapshot();
        SimilarityEngine::new(store.as_ref(), &self.storage, &self.config.search)
            .filtered_matches(user_id, &TagFilter::new(tags), top_n)
    }

    pub fn matches_for_text(&self, text: &str, top_n: usize) -> MatchResult<Vec<Match>> {
        let store = self.snapshot();
        SimilarityEngine::new(store.as_ref(), &self.storage, &self.config.search)
            .with_embedder(&self.embeddings)
            .matches_for_text(text, top_n)
    }

    fn communities(&self) -> CommunityEngine<'_> {
        CommunityEngine::new(&self.storage, &self.storage, self.config.community.clone())
    }

    pub fn community(&self, user_id: i64) -> MatchResult<Vec<CommunityMember>> {
        self.communities().members(user_id)
    }

    /// Recompute communities over the current snapshot.
    pub fn recluster(&self) -> MatchResult<usize> {
        let store = self.snapshot();
        self.communities().recluster(store.as_ref())
    }

    pub fn insights(&self) -> MatchResult<InsightsReport> {
        self.communities().insights()
    }

    pub fn predict_friendship(&self, a: i64, b: i64) -> MatchResult<FriendshipPrediction> {
        FriendshipEngine::new(&self.storage, &self.classifier).predict(a, b)
    }

    pub fn mutual_interests(&self, a: i64, b: i64) -> MatchResult<Vec<String>> {
        FriendshipEngine::new(&self.storage, &self.classifier).mutual_interests(a, b)
    }

    /// Insert a profile. It becomes searchable after [`rebuild_index`](Self::rebuild_index).
    pub fn create_profile(&self, user: NewUser) -> MatchResult<UserRecord> {
        let interests = user.interests.len();
        let record = self.storage.create_user(user)?;
        events::profile_created(record.id, interests);
        Ok(record)
    }

    /// Re-embed every profile, save the index atomically, swap the snapshot.
    pub fn rebuild_index(&self) -> MatchResult<usize> {
        let _guard = self
            .rebuild_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let started = Instant::now();

        let store = IndexBuilder::new(&self.storage, &self.embeddings, &self.config.index)
            .build_and_save(&self.index_path)?;
        let vectors = store.len();

        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(store);

        events::index_rebuilt(
            &self.index_path.display().to_string(),
            vectors,
            started.elapsed().as_millis(),
        );
        Ok(vectors)
    }

    /// Directory and index sizes, and whether they still line up.
    pub fn health(&self) -> MatchResult<HealthReport> {
        let store = self.snapshot();
        let directory_users = self.storage.count_users()?;
        let index_vectors = store.len();

        let (status, pending_users, message) = if directory_users == index_vectors {
            (HealthStatus::Healthy, 0, None)
        } else if directory_users > index_vectors {
            let pending = directory_users - index_vectors;
            (
                HealthStatus::Degraded,
                pending,
                Some(format!("{pending} profiles not yet indexed; rebuild the index")),
            )
        } else {
            warn!(directory_users, index_vectors, "index holds more vectors than the directory");
            (
                HealthStatus::Unhealthy,
                0,
                Some("index holds vectors for users missing from the directory".to_string()),
            )
        };

        Ok(HealthReport {
            status,
            directory_users,
            index_vectors,
            dimensions: store.dimensions(),
            metric: store.metric().as_str().to_string(),
            pending_users,
            message,
        })
    }
}

fn parse_config(opts: &RuntimeOptions) -> MatchResult<SkillmatchConfig> {
    match &opts.config_toml {
        Some(toml_str) => SkillmatchConfig::from_toml(toml_str)
            .map_err(|e| MatchError::Configuration(e.to_string())),
        None => Ok(SkillmatchConfig::default()),
    }
}

fn load_or_build(
    path: &Path,
    storage: &StorageEngine,
    embeddings: &EmbeddingEngine,
    config: &SkillmatchConfig,
    build_missing: bool,
) -> MatchResult<VectorStore> {
    let _span = skillmatch_observability::index_span!("load", path.display()).entered();
    if path.exists() {
        let store = format::load(path)?;
        return Ok(store.with_parallel_threshold(config.index.parallel_threshold));
    }
    if !build_missing {
        return Err(MatchError::Configuration(format!(
            "index file {} not found",
            path.display()
        )));
    }
    info!(path = %path.display(), "index file missing, building from directory");
    IndexBuilder::new(storage, embeddings, &config.index).build_and_save(path)
}

/// Initialize the global MatchRuntime singleton and tracing.
///
/// Returns an error if already initialized or if initialization fails.
pub fn initialize(opts: RuntimeOptions) -> MatchResult<()> {
    let config = parse_config(&opts)?;
    skillmatch_observability::init_tracing_from_config(&config.observability);

    let runtime = MatchRuntime::new(opts)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| MatchError::Configuration("MatchRuntime already initialized".into()))
}

/// Get the global MatchRuntime.
pub fn get() -> MatchResult<Arc<MatchRuntime>> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(|| MatchError::Configuration("MatchRuntime not initialized".into()))
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
