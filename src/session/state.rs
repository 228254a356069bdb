use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

impl Default for SessionStatus {
    fn default() -> Self {
        SessionStatus::Idle
    }
}

/// What a tick did. `Completed` is reported on the single transition into
/// the terminal state and never again, which is what makes the completion
/// hook idempotent by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick arrived while not Running; silently dropped.
    Ignored,
    Accumulated,
    Completed,
}

/// One timed, in-memory attempt to read a single content item.
///
/// The session holds no timer of its own; it is driven by an external
/// once-per-second scheduler, which keeps it purely reactive and testable
/// with synthetic ticks. Never persisted; destroyed with its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingSessionState {
    pub content_item_id: String,
    pub target_seconds: u64,
    pub elapsed_seconds: u64,
    pub status: SessionStatus,
    pub started_at: Option<DateTime<Utc>>,
}

impl ReadingSessionState {
    pub fn new(content_item_id: String, target_seconds: u64) -> Self {
        Self {
            content_item_id,
            target_seconds,
            elapsed_seconds: 0,
            status: SessionStatus::Idle,
            started_at: None,
        }
    }

    /// Begin or resume. Valid from Idle or Paused; a no-op when already
    /// Running; Completed is terminal and stays put.
    pub fn start(&mut self, now: DateTime<Utc>) {
        match self.status {
            SessionStatus::Idle | SessionStatus::Paused => {
                self.status = SessionStatus::Running;
                self.started_at = Some(now);
            }
            SessionStatus::Running | SessionStatus::Completed => {}
        }
    }

    /// Valid only from Running. Keeps accumulated elapsed time.
    pub fn pause(&mut self) {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Paused;
        }
    }

    /// Accumulate reading time. Ticks outside Running are dropped as a
    /// defensive no-op, not an error: the external scheduler may race a
    /// pause or teardown by one beat.
    pub fn tick(&mut self, delta_seconds: u64) -> TickOutcome {
        if self.status != SessionStatus::Running {
            return TickOutcome::Ignored;
        }

        self.elapsed_seconds += delta_seconds;

        if self.elapsed_seconds >= self.target_seconds {
            self.status = SessionStatus::Completed;
            return TickOutcome::Completed;
        }

        TickOutcome::Accumulated
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.target_seconds.saturating_sub(self.elapsed_seconds)
    }

    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }
}
