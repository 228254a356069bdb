use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// A readable article in the catalog. Immutable from the engine's side;
/// only the admin surface inserts or removes items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub body: String,
    pub estimated_minutes: u32,
    pub reward_xp: u64,
    pub category: String,
    pub difficulty: Difficulty,
}

impl ContentItem {
    /// Reading time required to complete a session for this item.
    pub fn target_seconds(&self) -> u64 {
        u64::from(self.estimated_minutes) * 60
    }
}
