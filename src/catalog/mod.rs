//! Content catalog access. The engine treats items as read-only; insert
//! and delete exist for the admin surface and for seeding.

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    db::Database,
    error::{EngineError, EngineResult},
    models::ContentItem,
    observable::Observable,
};

#[derive(Clone)]
pub struct ContentCatalog {
    db: Database,
    items: Arc<Observable<Vec<ContentItem>>>,
}

fn validate_item(item: &ContentItem) -> EngineResult<()> {
    if item.title.trim().is_empty() {
        return Err(EngineError::validation("title", "title must not be blank"));
    }
    if item.estimated_minutes == 0 {
        return Err(EngineError::validation(
            "estimated_minutes",
            "estimated reading time must be positive",
        ));
    }
    if item.reward_xp == 0 {
        return Err(EngineError::validation(
            "reward_xp",
            "reward XP must be positive",
        ));
    }
    Ok(())
}

impl ContentCatalog {
    pub async fn open(db: Database) -> EngineResult<Self> {
        let items = db.list_content_items().await?;
        Ok(Self {
            db,
            items: Arc::new(Observable::new(items)),
        })
    }

    pub fn watch(&self) -> watch::Receiver<Vec<ContentItem>> {
        self.items.subscribe()
    }

    pub async fn get(&self, item_id: &str) -> EngineResult<Option<ContentItem>> {
        self.db
            .get_content_item(item_id)
            .await
            .map_err(EngineError::from)
    }

    pub async fn list(&self) -> EngineResult<Vec<ContentItem>> {
        self.db.list_content_items().await.map_err(EngineError::from)
    }

    pub async fn insert(&self, item: ContentItem) -> EngineResult<()> {
        validate_item(&item)?;
        self.db.insert_content_item(&item).await?;
        self.refresh().await
    }

    /// Remove an item; the storage layer cascades the delete to its notes.
    /// Returns false when no such item exists.
    pub async fn delete(&self, item_id: &str) -> EngineResult<bool> {
        let deleted = self.db.delete_content_item(item_id).await?;
        if deleted {
            self.refresh().await?;
        }
        Ok(deleted)
    }

    async fn refresh(&self) -> EngineResult<()> {
        let items = self.db.list_content_items().await?;
        self.items.publish(items);
        Ok(())
    }
}
