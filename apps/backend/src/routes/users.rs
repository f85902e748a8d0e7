use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::users::User;
use crate::services::users::UserService;
use crate::state::app_state::AppState;

pub const USER_NOT_FOUND: &str = "User not found";

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub full_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
        }
    }
}

async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = with_txn(&app_state, |txn| {
        Box::pin(async move { UserService.list_users(txn).await })
    })
    .await?;

    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_user(
    path_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = path_id.into_inner();

    let user = with_txn(&app_state, move |txn| {
        Box::pin(async move { UserService.get_user(txn, user_id).await })
    })
    .await?
    .ok_or_else(|| DomainError::not_found(NotFoundKind::User, USER_NOT_FOUND))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

async fn create_user(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();

    let user = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            UserService
                .create_user(txn, &payload.email, payload.full_name.as_deref())
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/users", "/users/"])
            .route(web::get().to(list_users))
            .route(web::post().to(create_user)),
    )
    .service(web::resource("/users/{id}").route(web::get().to(get_user)));
}
