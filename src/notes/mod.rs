//! Note Store: validated CRUD over notes attached to content items.
//!
//! Creating a note (never editing one) pays a fixed XP bonus through the
//! ledger's atomic award primitive. Cascade delete of notes when their
//! content item is removed is the storage layer's job; nothing here issues
//! a cleanup pass.

use std::sync::Arc;

use chrono::Utc;
use log::info;
use tokio::sync::watch;
use uuid::Uuid;

use crate::{
    db::Database,
    error::{EngineError, EngineResult},
    gamification::rules::NOTE_CREATION_XP,
    ledger::ProgressLedger,
    models::Note,
    observable::Observable,
};

#[derive(Clone)]
pub struct NoteStore {
    db: Database,
    ledger: ProgressLedger,
    notes: Arc<Observable<Vec<Note>>>,
}

fn validate_text(text: &str) -> EngineResult<()> {
    if text.trim().is_empty() {
        return Err(EngineError::validation("text", "note text must not be blank"));
    }
    Ok(())
}

impl NoteStore {
    pub async fn open(db: Database, ledger: ProgressLedger) -> EngineResult<Self> {
        let notes = db.list_all_notes().await?;
        Ok(Self {
            db,
            ledger,
            notes: Arc::new(Observable::new(notes)),
        })
    }

    /// All notes, newest first; the current list immediately on subscribe,
    /// then after every mutation.
    pub fn watch(&self) -> watch::Receiver<Vec<Note>> {
        self.notes.subscribe()
    }

    /// Save a brand-new note and award the creation bonus. Blank text is
    /// rejected before any storage call.
    pub async fn create(&self, content_item_id: &str, text: &str) -> EngineResult<Note> {
        validate_text(text)?;

        let note = Note {
            id: Uuid::new_v4().to_string(),
            content_item_id: content_item_id.to_string(),
            text: text.to_string(),
            created_at_ms: Utc::now().timestamp_millis(),
        };

        self.db.insert_note(&note).await?;
        self.ledger.award_xp(NOTE_CREATION_XP).await?;
        info!("Note {} created for item {content_item_id}", note.id);

        self.refresh().await?;
        Ok(note)
    }

    /// Replace a note's text. Returns the updated note, or None when no
    /// such note exists. Never awards XP.
    pub async fn update(&self, note_id: &str, text: &str) -> EngineResult<Option<Note>> {
        validate_text(text)?;

        if !self.db.update_note_text(note_id, text.to_string()).await? {
            return Ok(None);
        }

        self.refresh().await?;
        self.db.get_note(note_id).await.map_err(EngineError::from)
    }

    /// Delete a single note. Returns false when no such note exists.
    pub async fn delete(&self, note_id: &str) -> EngineResult<bool> {
        let deleted = self.db.delete_note(note_id).await?;
        if deleted {
            self.refresh().await?;
        }
        Ok(deleted)
    }

    pub async fn get(&self, note_id: &str) -> EngineResult<Option<Note>> {
        self.db.get_note(note_id).await.map_err(EngineError::from)
    }

    /// Notes for one content item, newest first.
    pub async fn list_by_content_item(&self, content_item_id: &str) -> EngineResult<Vec<Note>> {
        self.db
            .list_notes_for_content_item(content_item_id)
            .await
            .map_err(EngineError::from)
    }

    /// All notes, newest first.
    pub async fn list_all(&self) -> EngineResult<Vec<Note>> {
        self.db.list_all_notes().await.map_err(EngineError::from)
    }

    /// Re-read and republish after external changes, e.g. a content-item
    /// delete whose cascade removed notes behind our back.
    pub async fn refresh(&self) -> EngineResult<()> {
        let notes = self.db.list_all_notes().await?;
        self.notes.publish(notes);
        Ok(())
    }
}
