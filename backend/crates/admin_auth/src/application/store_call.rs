//! Bounded credential store calls

use std::future::Future;
use std::time::Duration;

use crate::error::AuthResult;

/// Await a store call, failing with `StoreUnavailable` once `limit` elapses.
pub(crate) async fn bounded<T, F>(limit: Duration, call: F) -> AuthResult<T>
where
    F: Future<Output = AuthResult<T>>,
{
    tokio::time::timeout(limit, call).await?
}
