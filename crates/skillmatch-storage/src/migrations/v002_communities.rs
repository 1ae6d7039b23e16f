//! v002: user_communities (one community label per user, -1 = noise).

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS user_communities (
    user_id       INTEGER PRIMARY KEY REFERENCES users(user_id) ON DELETE CASCADE,
    community_id  INTEGER NOT NULL,
    assigned_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_user_communities_community ON user_communities(community_id);
";
