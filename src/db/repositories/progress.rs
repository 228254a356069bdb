use anyhow::Result;
use rusqlite::{params, Row};

use crate::{
    db::{
        connection::Database,
        helpers::{to_i64, to_u32, to_u64},
    },
    gamification::rules::{next_streak, streak_decision},
    models::ProgressRecord,
};

fn row_to_progress(row: &Row) -> Result<ProgressRecord> {
    let total_xp: i64 = row.get("total_xp")?;
    let streak_days: i64 = row.get("streak_days")?;
    let daily_target_minutes: i64 = row.get("daily_target_minutes")?;
    let total_reading_seconds: i64 = row.get("total_reading_seconds")?;

    Ok(ProgressRecord {
        total_xp: to_u64(total_xp, "total_xp")?,
        streak_days: to_u32(streak_days, "streak_days")?,
        daily_target_minutes: to_u32(daily_target_minutes, "daily_target_minutes")?,
        last_read_ms: row.get("last_read_ms")?,
        total_reading_seconds: to_u64(total_reading_seconds, "total_reading_seconds")?,
    })
}

fn select_progress(conn: &rusqlite::Connection) -> Result<ProgressRecord> {
    let mut stmt = conn.prepare(
        "SELECT total_xp, streak_days, daily_target_minutes, last_read_ms, total_reading_seconds
         FROM progress
         WHERE id = 1",
    )?;

    let mut rows = stmt.query([])?;
    match rows.next()? {
        Some(row) => row_to_progress(row),
        None => Err(anyhow::anyhow!("progress record missing; bootstrap not run")),
    }
}

impl Database {
    /// Seed the singleton ledger row with defaults. Idempotent: a second
    /// call finds the row already present and changes nothing.
    pub async fn ensure_progress_record(&self) -> Result<()> {
        self.execute(|conn| {
            conn.execute(
                "INSERT INTO progress (id) VALUES (1)
                 ON CONFLICT (id) DO NOTHING",
                [],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn get_progress(&self) -> Result<ProgressRecord> {
        self.execute(|conn| select_progress(conn)).await
    }

    /// Atomic XP increment. Deliberately `total_xp = total_xp + ?` rather
    /// than a read-then-write of the row, so concurrent awards from the
    /// note path and the session path cannot lose an update.
    pub async fn increment_total_xp(&self, amount: u64) -> Result<()> {
        self.execute(move |conn| {
            conn.execute(
                "UPDATE progress SET total_xp = total_xp + ?1 WHERE id = 1",
                params![to_i64(amount)?],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn increment_reading_seconds(&self, seconds: u64) -> Result<()> {
        self.execute(move |conn| {
            conn.execute(
                "UPDATE progress
                 SET total_reading_seconds = total_reading_seconds + ?1
                 WHERE id = 1",
                params![to_i64(seconds)?],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn update_daily_target(&self, minutes: u32) -> Result<()> {
        self.execute(move |conn| {
            conn.execute(
                "UPDATE progress SET daily_target_minutes = ?1 WHERE id = 1",
                params![i64::from(minutes)],
            )?;
            Ok(())
        })
        .await
    }

    /// Grant a completed session's reward: XP increment plus streak update
    /// in one transaction, so a crash cannot leave the XP applied with the
    /// streak stale. Returns the record as written.
    pub async fn apply_session_reward(
        &self,
        reward_xp: u64,
        now_ms: i64,
    ) -> Result<ProgressRecord> {
        self.execute(move |conn| {
            let tx = conn.transaction()?;

            tx.execute(
                "UPDATE progress SET total_xp = total_xp + ?1 WHERE id = 1",
                params![to_i64(reward_xp)?],
            )?;

            let (streak_days, last_read_ms): (i64, i64) = tx.query_row(
                "SELECT streak_days, last_read_ms FROM progress WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )?;

            let current = to_u32(streak_days, "streak_days")?;
            let updated = next_streak(current, streak_decision(last_read_ms, now_ms));

            tx.execute(
                "UPDATE progress SET streak_days = ?1, last_read_ms = ?2 WHERE id = 1",
                params![i64::from(updated), now_ms],
            )?;

            tx.commit()?;

            select_progress(conn)
        })
        .await
    }
}
