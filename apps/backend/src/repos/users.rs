//! User repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;

use crate::adapters::users_sea::{self as users_adapter, UserCreate};
use crate::errors::domain::DomainError;

/// User domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub full_name: Option<String>,
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, DomainError> {
    let users = users_adapter::list_users(conn).await?;
    Ok(users.into_iter().map(User::from).collect())
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    // ids are stored as 32-bit integers; a wider id cannot match a row
    let Ok(user_id) = i32::try_from(user_id) else {
        return Ok(None);
    };
    let user = users_adapter::find_user_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    full_name: Option<&str>,
) -> Result<User, DomainError> {
    let dto = UserCreate::new(email).with_full_name(full_name.map(str::to_string));
    let user = users_adapter::create_user(conn, dto).await?;
    Ok(User::from(user))
}

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
        }
    }
}
