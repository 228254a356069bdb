pub mod content;
pub mod leaderboard;
pub mod note;
pub mod progress;

pub use content::{ContentItem, Difficulty};
pub use leaderboard::{LeaderboardEntry, RankedEntry};
pub use note::Note;
pub use progress::ProgressRecord;
