use backend::adapters::items_sea::{self, ItemCreate};
use backend::AppError;

use crate::support::build_test_state;
use crate::support::factory::create_test_user;

#[tokio::test]
async fn create_and_find_item() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db();
    let owner = create_test_user(db, "items", Some("Owner")).await?;

    let created = items_sea::create_item(
        db,
        ItemCreate::new("Chair", owner.id).with_description(Some("oak".to_string())),
    )
    .await?;
    assert_eq!(created.title, "Chair");
    assert_eq!(created.description.as_deref(), Some("oak"));
    assert_eq!(created.owner_id, owner.id);

    let found = items_sea::find_item_by_id(db, created.id).await?;
    assert_eq!(found, Some(created));

    Ok(())
}

#[tokio::test]
async fn list_is_ordered_by_id() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = state.db();

    for title in ["zeta", "alpha", "mid"] {
        items_sea::create_item(db, ItemCreate::new(title, 7)).await?;
    }

    let listed = items_sea::list_items(db).await?;
    let titles: Vec<&str> = listed.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["zeta", "alpha", "mid"]);
    assert_eq!(
        listed.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    Ok(())
}

#[tokio::test]
async fn dangling_owner_id_is_accepted() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let item = items_sea::create_item(state.db(), ItemCreate::new("Ghost", 404)).await?;
    assert_eq!(item.owner_id, 404);
    assert!(item.description.is_none());

    Ok(())
}
