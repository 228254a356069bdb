pub mod state;
pub mod tracker;

pub use state::{ReadingSessionState, SessionStatus, TickOutcome};
pub use tracker::{ReadingTracker, SessionSnapshot};
