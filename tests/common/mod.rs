#![allow(dead_code)]

use readquest::{ContentItem, Difficulty, Engine};
use tempfile::TempDir;

/// Engine backed by a real SQLite file in a fresh temp directory. The
/// TempDir must stay alive for the duration of the test.
pub async fn open_engine() -> (TempDir, Engine) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let engine = Engine::open(dir.path().join("readquest.sqlite3"))
        .await
        .expect("failed to open engine");
    (dir, engine)
}

pub fn article(id: &str, estimated_minutes: u32, reward_xp: u64) -> ContentItem {
    ContentItem {
        id: id.to_string(),
        title: format!("Article {id}"),
        body: "Lorem ipsum dolor sit amet.".to_string(),
        estimated_minutes,
        reward_xp,
        category: "general".to_string(),
        difficulty: Difficulty::Beginner,
    }
}
