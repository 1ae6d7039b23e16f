//! Community assignments: the `user_communities` table.

use rusqlite::{params, Connection, OptionalExtension};

use skillmatch_core::errors::MatchResult;
use skillmatch_core::models::CommunityMember;

use super::{in_transaction, sql};

/// Swap the whole assignment table for `labels` (`(user_id, community_id)`).
pub fn replace_assignments(conn: &Connection, labels: &[(i64, i64)]) -> MatchResult<usize> {
    in_transaction(conn, "replace_assignments", |tx| {
        sql(tx.execute("DELETE FROM user_communities", []))?;
        let mut insert = sql(tx.prepare(
            "INSERT INTO user_communities (user_id, community_id) VALUES (?1, ?2)",
        ))?;
        for (user_id, community_id) in labels {
            sql(insert.execute(params![user_id, community_id]))?;
        }
        Ok(labels.len())
    })
}

pub fn get_community(conn: &Connection, user_id: i64) -> MatchResult<Option<i64>> {
    let mut stmt = sql(conn.prepare_cached(
        "SELECT community_id FROM user_communities WHERE user_id = ?1",
    ))?;
    sql(stmt.query_row(params![user_id], |row| row.get(0)).optional())
}

/// Everyone labelled `community_id`, ascending by user id.
pub fn community_members(
    conn: &Connection,
    community_id: i64,
) -> MatchResult<Vec<CommunityMember>> {
    let mut stmt = sql(conn.prepare_cached(
        "SELECT u.user_id, u.name
         FROM user_communities c
         JOIN users u ON u.user_id = c.user_id
         WHERE c.community_id = ?1
         ORDER BY u.user_id",
    ))?;
    let members = sql(stmt.query_map(params![community_id], |row| {
        Ok(CommunityMember {
            user_id: row.get(0)?,
            name: row.get(1)?,
        })
    }))?;
    sql(members.collect())
}
