use backend::repos::items::{self, Item};
use backend::repos::users::{self, User};
use backend::AppError;
use backend_test_support::unique_helpers::{unique_email, unique_str};
use sea_orm::ConnectionTrait;

/// Insert a user with a unique email and the given display name.
pub async fn create_test_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    prefix: &str,
    full_name: Option<&str>,
) -> Result<User, AppError> {
    let email = unique_email(prefix);
    Ok(users::create_user(conn, &email, full_name).await?)
}

/// Insert an item with a unique title for `owner_id`.
pub async fn create_test_item<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i32,
) -> Result<Item, AppError> {
    let title = unique_str("item");
    Ok(items::create_item(conn, &title, None, owner_id).await?)
}
