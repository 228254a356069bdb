use serde::{Deserialize, Serialize};

/// The durable singleton ledger of a user's cumulative progress.
///
/// Exactly one logical row exists; it is created once with these defaults
/// and thereafter mutated field by field, never replaced or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub total_xp: u64,
    pub streak_days: u32,
    pub daily_target_minutes: u32,
    /// Epoch milliseconds of the last qualifying read; 0 = never read.
    pub last_read_ms: i64,
    pub total_reading_seconds: u64,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            total_xp: 0,
            streak_days: 0,
            daily_target_minutes: 5,
            last_read_ms: 0,
            total_reading_seconds: 0,
        }
    }
}

impl ProgressRecord {
    pub fn daily_target_seconds(&self) -> u64 {
        u64::from(self.daily_target_minutes) * 60
    }
}
