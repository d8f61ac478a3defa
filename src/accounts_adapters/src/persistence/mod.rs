pub mod hashmap_account_store;
pub mod mongo_account_store;

use std::{future::Future, time::Duration};

use accounts_core::AccountStoreError;
use tokio_util::sync::CancellationToken;

/// Upper bound on a single store call, independent of the caller's token.
pub const STORE_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs `call` until it completes, `cancel` fires or `limit` elapses,
/// whichever comes first.
pub async fn bounded<T, F>(
    cancel: &CancellationToken,
    limit: Duration,
    call: F,
) -> Result<T, AccountStoreError>
where
    F: Future<Output = Result<T, AccountStoreError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(AccountStoreError::Cancelled),
        result = tokio::time::timeout(limit, call) => {
            result.map_err(|_| AccountStoreError::TimedOut)?
        }
    }
}
