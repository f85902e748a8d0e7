use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::trace_ctx;

/// Boxed future returned by `with_txn` closures; it may borrow the transaction.
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + Send + 'a>>;

/// Run `f` inside a fresh database transaction taken from the pool.
///
/// Commits when `f` returns `Ok`, rolls back when it returns `Err`. A failed
/// rollback is logged and the closure's error is returned unchanged. If the
/// future is dropped mid-flight, the transaction rolls back on drop.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R>,
{
    let txn = state.db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!(
                    trace_id = %trace_ctx::trace_id(),
                    error = %rollback_err,
                    "rollback failed; keeping original error"
                );
            }
            Err(err)
        }
    }
}
