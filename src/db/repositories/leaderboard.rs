use anyhow::Result;
use rusqlite::{params, Row};

use crate::{
    db::{connection::Database, helpers::{to_i64, to_u64}},
    models::LeaderboardEntry,
};

fn row_to_entry(row: &Row) -> Result<LeaderboardEntry> {
    let total_xp: i64 = row.get("total_xp")?;

    Ok(LeaderboardEntry {
        user_id: row.get("user_id")?,
        display_name: row.get("display_name")?,
        total_xp: to_u64(total_xp, "total_xp")?,
    })
}

impl Database {
    /// Insert or refresh an entry. First insertion fixes the entry's place
    /// in the underlying order; later upserts keep it, which is what makes
    /// tie-breaking in the ranked view deterministic.
    pub async fn upsert_leaderboard_entry(
        &self,
        entry: &LeaderboardEntry,
        now_ms: i64,
    ) -> Result<()> {
        let record = entry.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO leaderboard_entries (user_id, display_name, total_xp, inserted_at_ms)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (user_id) DO UPDATE SET
                     display_name = excluded.display_name,
                     total_xp = excluded.total_xp",
                params![
                    record.user_id,
                    record.display_name,
                    to_i64(record.total_xp)?,
                    now_ms,
                ],
            )?;
            Ok(())
        })
        .await
    }

    /// Entries in their stable underlying order (insertion order).
    pub async fn list_leaderboard_entries(&self) -> Result<Vec<LeaderboardEntry>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT user_id, display_name, total_xp
                 FROM leaderboard_entries
                 ORDER BY inserted_at_ms ASC, rowid ASC",
            )?;

            let mut rows = stmt.query([])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_entry(row)?);
            }

            Ok(entries)
        })
        .await
    }

    /// Remove an entry. Returns false when no such user exists.
    pub async fn delete_leaderboard_entry(&self, user_id: &str) -> Result<bool> {
        let user_id = user_id.to_string();
        self.execute(move |conn| {
            let rows_affected = conn.execute(
                "DELETE FROM leaderboard_entries WHERE user_id = ?1",
                params![user_id],
            )?;
            Ok(rows_affected > 0)
        })
        .await
    }
}
