//! Reading-progress & gamification engine.
//!
//! Users read short articles against a timed target, accumulate XP, build
//! daily streaks, take notes, and compare standing on a leaderboard. This
//! crate is the engine behind that: the session timing state machine, the
//! accrual rules, the note lifecycle and the ranking computation, on top
//! of a SQLite store. Screens, navigation and real authentication live in
//! the embedding application.

pub mod catalog;
pub mod credentials;
pub mod db;
pub mod engine;
pub mod error;
pub mod gamification;
pub mod leaderboard;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod notes;
pub mod observable;
pub mod session;

pub use catalog::ContentCatalog;
pub use credentials::{CredentialStore, InMemoryCredentialStore};
pub use db::Database;
pub use engine::Engine;
pub use error::{EngineError, EngineResult};
pub use leaderboard::Leaderboard;
pub use ledger::ProgressLedger;
pub use models::{ContentItem, Difficulty, LeaderboardEntry, Note, ProgressRecord, RankedEntry};
pub use notes::NoteStore;
pub use observable::Observable;
pub use session::{ReadingSessionState, ReadingTracker, SessionSnapshot, SessionStatus, TickOutcome};
