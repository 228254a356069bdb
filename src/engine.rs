use std::path::PathBuf;

use crate::{
    catalog::ContentCatalog,
    db::Database,
    error::EngineResult,
    leaderboard::Leaderboard,
    ledger::ProgressLedger,
    notes::NoteStore,
    session::ReadingTracker,
};

/// Top-level handle wiring the storage adapter to the services. Cheap to
/// clone; all clones share the same database worker and observables.
#[derive(Clone)]
pub struct Engine {
    db: Database,
    catalog: ContentCatalog,
    ledger: ProgressLedger,
    notes: NoteStore,
    leaderboard: Leaderboard,
}

impl Engine {
    pub async fn open(db_path: PathBuf) -> EngineResult<Self> {
        let db = Database::new(db_path)?;

        let ledger = ProgressLedger::open(db.clone()).await?;
        let catalog = ContentCatalog::open(db.clone()).await?;
        let notes = NoteStore::open(db.clone(), ledger.clone()).await?;
        let leaderboard = Leaderboard::open(db.clone()).await?;

        Ok(Self {
            db,
            catalog,
            ledger,
            notes,
            leaderboard,
        })
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &ProgressLedger {
        &self.ledger
    }

    pub fn notes(&self) -> &NoteStore {
        &self.notes
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Build a tracker for one reading-screen visit. Returns None when the
    /// content item is unknown.
    pub async fn begin_reading(&self, content_item_id: &str) -> EngineResult<Option<ReadingTracker>> {
        let Some(item) = self.catalog.get(content_item_id).await? else {
            return Ok(None);
        };

        Ok(Some(ReadingTracker::new(item, self.ledger.clone())))
    }

    /// Admin removal of a content item. The cascade drops its notes in
    /// storage; the note stream is re-read afterwards so subscribers see
    /// the shrunken list.
    pub async fn remove_content_item(&self, content_item_id: &str) -> EngineResult<bool> {
        let deleted = self.catalog.delete(content_item_id).await?;
        if deleted {
            self.notes.refresh().await?;
        }
        Ok(deleted)
    }
}
