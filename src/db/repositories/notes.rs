use anyhow::Result;
use rusqlite::{params, Row};

use crate::{db::connection::Database, models::Note};

fn row_to_note(row: &Row) -> Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        content_item_id: row.get("content_item_id")?,
        text: row.get("text")?,
        created_at_ms: row.get("created_at_ms")?,
    })
}

impl Database {
    pub async fn insert_note(&self, note: &Note) -> Result<()> {
        let record = note.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO notes (id, content_item_id, text, created_at_ms)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    record.id,
                    record.content_item_id,
                    record.text,
                    record.created_at_ms,
                ],
            )?;
            Ok(())
        })
        .await
    }

    /// Replace a note's text. Returns false when the note does not exist.
    pub async fn update_note_text(&self, note_id: &str, text: String) -> Result<bool> {
        let note_id = note_id.to_string();
        self.execute(move |conn| {
            let rows_affected = conn.execute(
                "UPDATE notes SET text = ?1 WHERE id = ?2",
                params![text, note_id],
            )?;
            Ok(rows_affected > 0)
        })
        .await
    }

    /// Delete a single note. Returns false when the note does not exist.
    pub async fn delete_note(&self, note_id: &str) -> Result<bool> {
        let note_id = note_id.to_string();
        self.execute(move |conn| {
            let rows_affected =
                conn.execute("DELETE FROM notes WHERE id = ?1", params![note_id])?;
            Ok(rows_affected > 0)
        })
        .await
    }

    pub async fn get_note(&self, note_id: &str) -> Result<Option<Note>> {
        let note_id = note_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, content_item_id, text, created_at_ms
                 FROM notes
                 WHERE id = ?1",
            )?;

            let mut rows = stmt.query(params![note_id])?;
            let note = match rows.next()? {
                Some(row) => Some(row_to_note(row)?),
                None => None,
            };
            Ok(note)
        })
        .await
    }

    pub async fn list_notes_for_content_item(&self, item_id: &str) -> Result<Vec<Note>> {
        let item_id = item_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, content_item_id, text, created_at_ms
                 FROM notes
                 WHERE content_item_id = ?1
                 ORDER BY created_at_ms DESC, rowid DESC",
            )?;

            let mut rows = stmt.query(params![item_id])?;
            let mut notes = Vec::new();
            while let Some(row) = rows.next()? {
                notes.push(row_to_note(row)?);
            }

            Ok(notes)
        })
        .await
    }

    pub async fn list_all_notes(&self) -> Result<Vec<Note>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, content_item_id, text, created_at_ms
                 FROM notes
                 ORDER BY created_at_ms DESC, rowid DESC",
            )?;

            let mut rows = stmt.query([])?;
            let mut notes = Vec::new();
            while let Some(row) = rows.next()? {
                notes.push(row_to_note(row)?);
            }

            Ok(notes)
        })
        .await
    }
}
