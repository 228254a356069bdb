//! Leaderboard: a ranked view over a stored set of user-XP entries.
//!
//! The entry set is maintained independently of the local progress ledger;
//! the two are deliberately not synchronized (see DESIGN.md).

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use crate::{
    db::Database,
    error::{EngineError, EngineResult},
    models::{LeaderboardEntry, RankedEntry},
    observable::Observable,
};

/// Rank entries by XP descending, 1-based. The sort is stable, so entries
/// with equal XP keep their relative order from the input set.
pub fn rerank(entries: &[LeaderboardEntry]) -> Vec<RankedEntry> {
    let mut sorted: Vec<&LeaderboardEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.total_xp.cmp(&a.total_xp));

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            rank: index as u32 + 1,
            user_id: entry.user_id.clone(),
            display_name: entry.display_name.clone(),
            total_xp: entry.total_xp,
        })
        .collect()
}

/// The first `n` entries of the ranked order.
pub fn top(entries: &[LeaderboardEntry], n: usize) -> Vec<RankedEntry> {
    let mut ranked = rerank(entries);
    ranked.truncate(n);
    ranked
}

#[derive(Clone)]
pub struct Leaderboard {
    db: Database,
    standings: Arc<Observable<Vec<RankedEntry>>>,
}

impl Leaderboard {
    pub async fn open(db: Database) -> EngineResult<Self> {
        let entries = db.list_leaderboard_entries().await?;
        Ok(Self {
            db,
            standings: Arc::new(Observable::new(rerank(&entries))),
        })
    }

    /// Ranked standings: current immediately, re-ranked after every change
    /// to the entry set.
    pub fn watch(&self) -> watch::Receiver<Vec<RankedEntry>> {
        self.standings.subscribe()
    }

    pub fn standings(&self) -> Vec<RankedEntry> {
        self.standings.latest()
    }

    pub async fn top(&self, n: usize) -> EngineResult<Vec<RankedEntry>> {
        let entries = self.db.list_leaderboard_entries().await?;
        Ok(top(&entries, n))
    }

    pub async fn upsert(&self, entry: LeaderboardEntry) -> EngineResult<()> {
        self.db
            .upsert_leaderboard_entry(&entry, Utc::now().timestamp_millis())
            .await?;
        self.refresh().await
    }

    pub async fn remove(&self, user_id: &str) -> EngineResult<bool> {
        let removed = self.db.delete_leaderboard_entry(user_id).await?;
        if removed {
            self.refresh().await?;
        }
        Ok(removed)
    }

    async fn refresh(&self) -> EngineResult<()> {
        let entries = self
            .db
            .list_leaderboard_entries()
            .await
            .map_err(EngineError::from)?;
        self.standings.publish(rerank(&entries));
        Ok(())
    }
}
