//! Users table: inserts, lookups, listing, count.

use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use skillmatch_core::errors::MatchResult;
use skillmatch_core::models::{NewUser, UserRecord};

use super::{in_transaction, sql};

const SELECT_USERS: &str =
    "SELECT user_id, name, city, dob, profile_text, country, gender FROM users";

fn read_user(row: &Row<'_>) -> rusqlite::Result<UserRecord> {
    Ok(UserRecord {
        id: row.get("user_id")?,
        name: row.get("name")?,
        city: row.get("city")?,
        date_of_birth: row.get("dob")?,
        profile_text: row.get("profile_text")?,
        country: row.get("country")?,
        gender: row.get("gender")?,
    })
}

/// Validate `user` and store it under the next dense id.
pub fn insert_user(conn: &Connection, user: NewUser) -> MatchResult<UserRecord> {
    user.validate()?;
    in_transaction(conn, "insert_user", |tx| {
        let next_id: i64 = sql(tx.query_row(
            "SELECT COALESCE(MAX(user_id) + 1, 0) FROM users",
            [],
            |row| row.get(0),
        ))?;
        let record = user.into_record(next_id);
        insert_record(tx, &record)?;
        Ok(record)
    })
}

/// Store a record under its own id.
pub fn insert_record(conn: &Connection, record: &UserRecord) -> MatchResult<()> {
    sql(conn.execute(
        "INSERT INTO users (user_id, name, city, dob, profile_text, country, gender)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            record.id,
            record.name,
            record.city,
            record.date_of_birth,
            record.profile_text,
            record.country,
            record.gender,
        ],
    ))
    .map(drop)
}

/// All-or-nothing import. Returns how many rows were written.
pub fn bulk_insert(conn: &Connection, records: &[UserRecord]) -> MatchResult<usize> {
    in_transaction(conn, "bulk_insert", |tx| {
        records
            .iter()
            .try_for_each(|record| insert_record(tx, record))?;
        Ok(records.len())
    })
}

pub fn get_user(conn: &Connection, id: i64) -> MatchResult<Option<UserRecord>> {
    let mut stmt = sql(conn.prepare_cached(&format!("{SELECT_USERS} WHERE user_id = ?1")))?;
    sql(stmt.query_row(params![id], read_user).optional())
}

/// Bound parameters per `IN (...)` statement, well under SQLite's
/// variable limit.
pub const GET_USERS_CHUNK: usize = 500;

/// Users among `ids`, ascending by id. Unknown ids are skipped.
///
/// Ids are fetched in sorted chunks of [`GET_USERS_CHUNK`], so a window of
/// any size stays within the bind-variable limit.
pub fn get_users(conn: &Connection, ids: &[i64]) -> MatchResult<Vec<UserRecord>> {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut users = Vec::with_capacity(sorted.len());
    for chunk in sorted.chunks(GET_USERS_CHUNK) {
        let placeholders = vec!["?"; chunk.len()].join(", ");
        let mut stmt = sql(conn.prepare_cached(&format!(
            "{SELECT_USERS} WHERE user_id IN ({placeholders}) ORDER BY user_id"
        )))?;
        let rows = sql(stmt.query_map(params_from_iter(chunk), read_user))?;
        for row in rows {
            users.push(sql(row)?);
        }
    }
    Ok(users)
}

pub fn list_users(conn: &Connection) -> MatchResult<Vec<UserRecord>> {
    let mut stmt = sql(conn.prepare_cached(&format!("{SELECT_USERS} ORDER BY user_id")))?;
    let users = sql(stmt.query_map([], read_user))?;
    sql(users.collect())
}

pub fn count_users(conn: &Connection) -> MatchResult<usize> {
    let count: i64 = sql(conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0)))?;
    Ok(usize::try_from(count).unwrap_or(0))
}
