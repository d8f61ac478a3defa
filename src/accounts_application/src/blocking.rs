use crate::AccountError;

/// Runs CPU-bound password work off the async workers, inside the caller's span.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T, AccountError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let current_span = tracing::Span::current();

    tokio::task::spawn_blocking(move || current_span.in_scope(work))
        .await
        .map_err(|e| AccountError::Internal(e.to_string()))
}
