use backend::repos::users;
use backend::{with_txn, AppError, ErrorCode};

use crate::support::build_test_state;
use crate::support::factory::create_test_user;

#[tokio::test]
async fn ok_commits() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let created = with_txn(&state, |txn| {
        Box::pin(async move { create_test_user(txn, "commit", Some("Kept")).await })
    })
    .await?;

    let listed = users::list_users(state.db()).await?;
    assert_eq!(listed, vec![created]);

    Ok(())
}

#[tokio::test]
async fn err_rolls_back_and_is_returned_unchanged() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let result: Result<(), AppError> = with_txn(&state, |txn| {
        Box::pin(async move {
            create_test_user(txn, "rollback", None).await?;
            Err(AppError::invalid(ErrorCode::ValidationError, "boom after insert"))
        })
    })
    .await;

    let err = result.expect_err("closure error should propagate");
    assert_eq!(err.code(), ErrorCode::ValidationError);
    assert!(err.to_string().contains("boom after insert"));

    assert!(users::list_users(state.db()).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn sequential_transactions_see_committed_rows() -> Result<(), AppError> {
    let state = build_test_state().await?;

    let first = with_txn(&state, |txn| {
        Box::pin(async move { create_test_user(txn, "seq", None).await })
    })
    .await?;

    let seen = with_txn(&state, move |txn| {
        Box::pin(async move { users::find_user_by_id(txn, first.id.into()).await.map_err(AppError::from) })
    })
    .await?;
    assert!(seen.is_some());

    Ok(())
}
