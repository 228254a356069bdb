//! Progress Ledger: the durable singleton record of cumulative XP, streak,
//! daily target, last-read timestamp and total reading time.
//!
//! Every mutation is a single-field atomic update against the one fixed
//! row (the session reward pairs its two updates inside one transaction).
//! After each successful write the fresh snapshot is published to
//! subscribers.

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

use crate::{
    db::Database,
    error::{EngineError, EngineResult},
    gamification::rules::is_valid_daily_target,
    models::ProgressRecord,
    observable::Observable,
};

#[derive(Clone)]
pub struct ProgressLedger {
    db: Database,
    snapshot: Arc<Observable<ProgressRecord>>,
}

impl ProgressLedger {
    /// Open the ledger, seeding the singleton row on first use. The seed is
    /// idempotent; opening an existing ledger changes nothing.
    pub async fn open(db: Database) -> EngineResult<Self> {
        db.ensure_progress_record().await?;
        let record = db.get_progress().await?;

        Ok(Self {
            db,
            snapshot: Arc::new(Observable::new(record)),
        })
    }

    /// Subscribe to ledger snapshots: the current record immediately, then
    /// every subsequent change.
    pub fn watch(&self) -> watch::Receiver<ProgressRecord> {
        self.snapshot.subscribe()
    }

    pub fn current(&self) -> ProgressRecord {
        self.snapshot.latest()
    }

    /// Add XP. Safe to call concurrently with any other award; the
    /// increment is atomic in storage.
    pub async fn award_xp(&self, amount: u64) -> EngineResult<ProgressRecord> {
        self.db.increment_total_xp(amount).await?;
        self.refresh().await
    }

    pub async fn add_reading_time(&self, seconds: u64) -> EngineResult<ProgressRecord> {
        self.db.increment_reading_seconds(seconds).await?;
        self.refresh().await
    }

    pub async fn set_daily_target(&self, minutes: u32) -> EngineResult<ProgressRecord> {
        if !is_valid_daily_target(minutes) {
            return Err(EngineError::validation(
                "daily_target_minutes",
                format!("{minutes} is not an allowed daily target"),
            ));
        }

        self.db.update_daily_target(minutes).await?;
        self.refresh().await
    }

    /// Grant a completed session's reward: XP plus streak update as one
    /// storage transaction.
    pub async fn apply_session_reward(
        &self,
        reward_xp: u64,
        now_ms: i64,
    ) -> EngineResult<ProgressRecord> {
        let record = self.db.apply_session_reward(reward_xp, now_ms).await?;
        info!(
            "Session reward applied: +{reward_xp} XP, streak now {} day(s)",
            record.streak_days
        );
        self.snapshot.publish(record.clone());
        Ok(record)
    }

    async fn refresh(&self) -> EngineResult<ProgressRecord> {
        let record = self.db.get_progress().await?;
        self.snapshot.publish(record.clone());
        Ok(record)
    }
}
