//! SeaORM adapter for items.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::items;

pub mod dto;

pub use dto::ItemCreate;

pub async fn list_items<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<items::Model>, sea_orm::DbErr> {
    items::Entity::find()
        .order_by_asc(items::Column::Id)
        .all(conn)
        .await
}

pub async fn find_item_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    item_id: i32,
) -> Result<Option<items::Model>, sea_orm::DbErr> {
    items::Entity::find_by_id(item_id).one(conn).await
}

/// Insert an item. `owner_id` is written as given; no owner lookup happens.
pub async fn create_item<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ItemCreate,
) -> Result<items::Model, sea_orm::DbErr> {
    let item_active = items::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        description: Set(dto.description),
        owner_id: Set(dto.owner_id),
    };

    item_active.insert(conn).await
}
