use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::error::AppError;
use crate::repos::items::{self, Item};

/// Item operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItemService;

impl ItemService {
    pub async fn list_items<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Item>, AppError> {
        let items = items::list_items(conn).await?;
        debug!(count = items.len(), "items.list");
        Ok(items)
    }

    pub async fn get_item<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        item_id: i64,
    ) -> Result<Option<Item>, AppError> {
        let item = items::find_item_by_id(conn, item_id).await?;
        debug!(item_id, found = item.is_some(), "items.get");
        Ok(item)
    }

    /// Persist a new item. The owner is not looked up; a dangling `owner_id` is stored as given.
    pub async fn create_item<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        title: &str,
        description: Option<&str>,
        owner_id: i32,
    ) -> Result<Item, AppError> {
        let item = items::create_item(conn, title, description, owner_id).await?;
        info!(item_id = item.id, owner_id = item.owner_id, "items.created");
        Ok(item)
    }
}
