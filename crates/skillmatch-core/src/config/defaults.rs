// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "skillmatch.db";
pub const DEFAULT_MMAP_SIZE: u64 = 268_435_456; // 256 MB
pub const DEFAULT_CACHE_SIZE: i64 = -64_000; // 64 MB (negative = KB)
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hashing";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;

// --- Index ---
pub const DEFAULT_INDEX_FILENAME: &str = "skillmatch.index";
pub const DEFAULT_INDEX_METRIC: &str = "l2";
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

// --- Search ---
pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_FILTERED_TOP_N: usize = 10;
pub const DEFAULT_OVERSAMPLING_FACTOR: usize = 5;
pub const DEFAULT_STOP_AT_CAP: bool = true;
pub const DEFAULT_REQUERY_WHEN_SHORT: bool = true;
pub const DEFAULT_SCORE_TRANSFORM: &str = "one_minus_distance";
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 2_000;

// --- Community ---
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;
pub const DEFAULT_TOP_INTERESTS: usize = 20;
pub const DEFAULT_TOP_CITIES: usize = 10;

// --- Friendship ---
// Reproduces the training rule `jaccard >= 0.3` => strong.
pub const DEFAULT_FRIENDSHIP_INTERCEPT: f64 = -3.0;
pub const DEFAULT_FRIENDSHIP_COEFFICIENTS: [f64; 4] = [10.0, 0.0, 0.0, 0.0];
pub const DEFAULT_FRIENDSHIP_THRESHOLD: f64 = 0.5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
