use backend::adapters::users_sea::{self, UserCreate};
use backend::entities::{items, users};
use backend::AppError;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, NotSet, Set};

use crate::support::build_test_state;

#[tokio::test]
async fn insert_assigns_increasing_ids() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db();

    let first = users_sea::create_user(db, UserCreate::new("one@example.test")).await?;
    let second = users_sea::create_user(
        db,
        UserCreate::new("two@example.test").with_full_name(Some("Two".to_string())),
    )
    .await?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(first.full_name.is_none());
    assert_eq!(second.full_name.as_deref(), Some("Two"));

    let listed = users_sea::list_users(db).await?;
    assert_eq!(listed, vec![first, second]);

    Ok(())
}

#[tokio::test]
async fn find_by_id_misses_return_none() -> Result<(), AppError> {
    let state = build_test_state().await?;

    assert!(users_sea::find_user_by_id(state.db(), 1).await?.is_none());
    assert!(users_sea::find_user_by_id(state.db(), -1).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn user_relation_finds_owned_items() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db();

    let owner = users_sea::create_user(db, UserCreate::new("owner@example.test")).await?;
    let other = users_sea::create_user(db, UserCreate::new("other@example.test")).await?;

    for (title, owner_id) in [("pen", owner.id), ("cup", other.id), ("hat", owner.id)] {
        items::ActiveModel {
            id: NotSet,
            title: Set(title.to_string()),
            description: Set(None),
            owner_id: Set(owner_id),
        }
        .insert(db)
        .await?;
    }

    let owned: Vec<items::Model> = owner.find_related(items::Entity).all(db).await?;
    let mut titles: Vec<String> = owned.into_iter().map(|i| i.title).collect();
    titles.sort();
    assert_eq!(titles, vec!["hat".to_string(), "pen".to_string()]);

    let back: Option<users::Model> = items::Entity::find_by_id(2)
        .find_also_related(users::Entity)
        .one(db)
        .await?
        .and_then(|(_, user)| user);
    assert_eq!(back.map(|u| u.email).as_deref(), Some("other@example.test"));

    Ok(())
}
