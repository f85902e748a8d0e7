use backend::services::ItemService;
use backend::{with_txn, AppError};

use crate::support::build_test_state;
use crate::support::factory::create_test_user;

#[tokio::test]
async fn create_then_get_item() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let owner = create_test_user(txn, "owner", None).await?;

            let service = ItemService;
            let created = service
                .create_item(txn, "Kettle", Some("stainless"), owner.id)
                .await?;
            assert_eq!(created.title, "Kettle");
            assert_eq!(created.owner_id, owner.id);

            let fetched = service.get_item(txn, created.id.into()).await?;
            assert_eq!(fetched, Some(created));
            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn dangling_owner_is_stored_as_given() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let item = with_txn(&state, |txn| {
        Box::pin(async move { ItemService.create_item(txn, "Orphan", None, 9999).await })
    })
    .await?;
    assert_eq!(item.owner_id, 9999);
    assert!(item.description.is_none());

    Ok(())
}

#[tokio::test]
async fn get_missing_item_is_none() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let found = with_txn(&state, |txn| {
        Box::pin(async move { ItemService.get_item(txn, 1).await })
    })
    .await?;
    assert!(found.is_none());

    Ok(())
}
