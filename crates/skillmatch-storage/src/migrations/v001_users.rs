//! v001: users.
//!
//! `user_id` is assigned densely from 0 so that id order is the
//! position order used by the vector store.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS users (
    user_id       INTEGER PRIMARY KEY,
    name          TEXT NOT NULL,
    city          TEXT NOT NULL DEFAULT '',
    dob           TEXT NOT NULL DEFAULT '',
    profile_text  TEXT NOT NULL DEFAULT '',
    country       TEXT,
    gender        TEXT,
    created_at    TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_users_city ON users(city);
";
