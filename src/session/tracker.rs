use std::sync::Arc;

use chrono::Utc;
use log::info;
use serde::Serialize;
use tokio::sync::{watch, Mutex};

use crate::{
    error::EngineResult,
    gamification::rules::daily_target_met,
    ledger::ProgressLedger,
    models::ContentItem,
    observable::Observable,
};

use super::state::{ReadingSessionState, TickOutcome};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub state: ReadingSessionState,
    pub remaining_seconds: u64,
}

/// Drives one reading-screen visit: owns the ephemeral session state and,
/// on the single completion, settles reading time and rewards against the
/// ledger.
///
/// The tracker has no timer of its own. The hosting context calls `tick`
/// at a nominal 1 Hz and stops calling on teardown; stopping ticks never
/// discards accumulated time and never triggers a retroactive completion.
#[derive(Clone)]
pub struct ReadingTracker {
    item: ContentItem,
    state: Arc<Mutex<ReadingSessionState>>,
    ledger: ProgressLedger,
    snapshot: Arc<Observable<SessionSnapshot>>,
}

impl ReadingTracker {
    pub fn new(item: ContentItem, ledger: ProgressLedger) -> Self {
        let state = ReadingSessionState::new(item.id.clone(), item.target_seconds());
        let snapshot = SessionSnapshot {
            remaining_seconds: state.remaining_seconds(),
            state: state.clone(),
        };

        Self {
            item,
            state: Arc::new(Mutex::new(state)),
            ledger,
            snapshot: Arc::new(Observable::new(snapshot)),
        }
    }

    pub fn content_item(&self) -> &ContentItem {
        &self.item
    }

    /// Session snapshots: current immediately, then on every transition
    /// and accumulating tick.
    pub fn watch(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot.subscribe()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        SessionSnapshot {
            remaining_seconds: state.remaining_seconds(),
            state: state.clone(),
        }
    }

    pub async fn start(&self) {
        let mut state = self.state.lock().await;
        state.start(Utc::now());
        publish(&self.snapshot, &state);
    }

    pub async fn pause(&self) {
        let mut state = self.state.lock().await;
        state.pause();
        publish(&self.snapshot, &state);
    }

    /// Feed elapsed reading time. On the tick that crosses the target the
    /// completion settlement runs exactly once: total reading time is
    /// banked, then XP and streak are granted if the daily target was met.
    pub async fn tick(&self, delta_seconds: u64) -> EngineResult<TickOutcome> {
        let (outcome, elapsed) = {
            let mut state = self.state.lock().await;
            let outcome = state.tick(delta_seconds);
            publish(&self.snapshot, &state);
            (outcome, state.elapsed_seconds)
        };

        if outcome == TickOutcome::Completed {
            self.settle_completion(elapsed).await?;
        }

        Ok(outcome)
    }

    async fn settle_completion(&self, elapsed_seconds: u64) -> EngineResult<()> {
        self.ledger.add_reading_time(elapsed_seconds).await?;

        let target_minutes = self.ledger.current().daily_target_minutes;
        if daily_target_met(elapsed_seconds, target_minutes) {
            self.ledger
                .apply_session_reward(self.item.reward_xp, Utc::now().timestamp_millis())
                .await?;
            info!(
                "Session for item {} completed after {elapsed_seconds}s; reward granted",
                self.item.id
            );
        } else {
            // Completed for UI purposes, but below the daily target: the
            // ledger's XP and streak stay untouched.
            info!(
                "Session for item {} completed after {elapsed_seconds}s; below {target_minutes}-minute daily target",
                self.item.id
            );
        }

        Ok(())
    }
}

fn publish(observable: &Observable<SessionSnapshot>, state: &ReadingSessionState) {
    observable.publish(SessionSnapshot {
        remaining_seconds: state.remaining_seconds(),
        state: state.clone(),
    });
}
