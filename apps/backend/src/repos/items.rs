//! Item repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::items_sea::{self as items_adapter, ItemCreate};
use crate::errors::domain::DomainError;

/// Item domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

pub async fn list_items<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Item>, DomainError> {
    let items = items_adapter::list_items(conn).await?;
    Ok(items.into_iter().map(Item::from).collect())
}

pub async fn find_item_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_id: i64,
) -> Result<Option<Item>, DomainError> {
    // ids are stored as 32-bit integers; a wider id cannot match a row
    let Ok(item_id) = i32::try_from(item_id) else {
        return Ok(None);
    };
    let item = items_adapter::find_item_by_id(conn, item_id).await?;
    Ok(item.map(Item::from))
}

pub async fn create_item<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
    description: Option<&str>,
    owner_id: i32,
) -> Result<Item, DomainError> {
    let dto = ItemCreate::new(title, owner_id).with_description(description.map(str::to_string));
    let item = items_adapter::create_item(conn, dto).await?;
    Ok(Item::from(item))
}

impl From<crate::entities::items::Model> for Item {
    fn from(model: crate::entities::items::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            owner_id: model.owner_id,
        }
    }
}
