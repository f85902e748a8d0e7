use sea_orm::ConnectionTrait;
use tracing::{debug, info};

use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User};

/// User operations. Lookups report absence as `None`, never as an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserService;

impl UserService {
    pub async fn list_users<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<User>, AppError> {
        let users = users::list_users(conn).await?;
        debug!(count = users.len(), "users.list");
        Ok(users)
    }

    pub async fn get_user<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: i64,
    ) -> Result<Option<User>, AppError> {
        let user = users::find_user_by_id(conn, user_id).await?;
        debug!(user_id, found = user.is_some(), "users.get");
        Ok(user)
    }

    /// Persist a new user. Email uniqueness is not checked.
    pub async fn create_user<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
        full_name: Option<&str>,
    ) -> Result<User, AppError> {
        let user = users::create_user(conn, email, full_name).await?;
        info!(user_id = user.id, email = %Redacted(&user.email), "users.created");
        Ok(user)
    }
}
