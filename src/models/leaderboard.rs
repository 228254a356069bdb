use serde::{Deserialize, Serialize};

/// A stored leaderboard row. Rank is never persisted; it is always derived
/// by re-sorting the entry set (see `leaderboard::rerank`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub display_name: String,
    pub total_xp: u64,
}

/// A leaderboard entry with its derived 1-based rank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub rank: u32,
    pub user_id: String,
    pub display_name: String,
    pub total_xp: u64,
}
