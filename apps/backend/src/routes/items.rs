use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::items::Item;
use crate::services::items::ItemService;
use crate::state::app_state::AppState;

pub const ITEM_NOT_FOUND: &str = "Item not found";

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i32,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            owner_id: item.owner_id,
        }
    }
}

async fn list_items(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let items = with_txn(&app_state, |txn| {
        Box::pin(async move { ItemService.list_items(txn).await })
    })
    .await?;

    let body: Vec<ItemResponse> = items.into_iter().map(ItemResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_item(
    path_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let item_id = path_id.into_inner();

    let item = with_txn(&app_state, move |txn| {
        Box::pin(async move { ItemService.get_item(txn, item_id).await })
    })
    .await?
    .ok_or_else(|| DomainError::not_found(NotFoundKind::Item, ITEM_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(ItemResponse::from(item)))
}

async fn create_item(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateItemRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();

    let item = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            ItemService
                .create_item(
                    txn,
                    &payload.title,
                    payload.description.as_deref(),
                    payload.owner_id,
                )
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(ItemResponse::from(item)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/items", "/items/"])
            .route(web::get().to(list_items))
            .route(web::post().to(create_item)),
    )
    .service(web::resource("/items/{id}").route(web::get().to(get_item)));
}
