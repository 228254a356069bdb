mod content;
mod leaderboard;
mod notes;
mod progress;
