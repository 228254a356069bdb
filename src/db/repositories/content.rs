use anyhow::{anyhow, Result};
use rusqlite::{params, Row};

use crate::{
    db::{connection::Database, helpers::to_i64},
    models::{ContentItem, Difficulty},
};

fn difficulty_from_str(value: &str) -> Result<Difficulty> {
    match value {
        "Beginner" => Ok(Difficulty::Beginner),
        "Intermediate" => Ok(Difficulty::Intermediate),
        "Advanced" => Ok(Difficulty::Advanced),
        other => Err(anyhow!("unknown difficulty '{other}'")),
    }
}

fn row_to_content_item(row: &Row) -> Result<ContentItem> {
    let estimated_minutes: i64 = row.get("estimated_minutes")?;
    let reward_xp: i64 = row.get("reward_xp")?;
    let difficulty: String = row.get("difficulty")?;

    Ok(ContentItem {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
        estimated_minutes: u32::try_from(estimated_minutes)
            .map_err(|_| anyhow!("estimated_minutes out of range: {estimated_minutes}"))?,
        reward_xp: u64::try_from(reward_xp)
            .map_err(|_| anyhow!("reward_xp contains negative value {reward_xp}"))?,
        category: row.get("category")?,
        difficulty: difficulty_from_str(&difficulty)?,
    })
}

impl Database {
    pub async fn insert_content_item(&self, item: &ContentItem) -> Result<()> {
        let record = item.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO content_items (id, title, body, estimated_minutes, reward_xp, category, difficulty)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id,
                    record.title,
                    record.body,
                    i64::from(record.estimated_minutes),
                    to_i64(record.reward_xp)?,
                    record.category,
                    record.difficulty.as_str(),
                ],
            )?;
            Ok(())
        })
        .await
    }

    pub async fn get_content_item(&self, item_id: &str) -> Result<Option<ContentItem>> {
        let item_id = item_id.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, body, estimated_minutes, reward_xp, category, difficulty
                 FROM content_items
                 WHERE id = ?1",
            )?;

            let mut rows = stmt.query(params![item_id])?;
            let item = match rows.next()? {
                Some(row) => Some(row_to_content_item(row)?),
                None => None,
            };
            Ok(item)
        })
        .await
    }

    pub async fn list_content_items(&self) -> Result<Vec<ContentItem>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, body, estimated_minutes, reward_xp, category, difficulty
                 FROM content_items
                 ORDER BY title ASC",
            )?;

            let mut rows = stmt.query([])?;
            let mut items = Vec::new();
            while let Some(row) = rows.next()? {
                items.push(row_to_content_item(row)?);
            }

            Ok(items)
        })
        .await
    }

    /// Delete a content item. Notes referencing it are removed by the
    /// ON DELETE CASCADE constraint; no cleanup pass is issued here.
    /// Returns false when no such item exists.
    pub async fn delete_content_item(&self, item_id: &str) -> Result<bool> {
        let item_id = item_id.to_string();
        self.execute(move |conn| {
            let rows_affected =
                conn.execute("DELETE FROM content_items WHERE id = ?1", params![item_id])?;
            Ok(rows_affected > 0)
        })
        .await
    }
}
