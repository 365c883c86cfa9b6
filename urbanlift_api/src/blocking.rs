use std::sync::Arc;

use crate::{error::ApiError, state::AppState};

/// Runs CPU bound or file backed work off the async workers.
pub async fn run_blocking<T, F>(state: &Arc<AppState>, work: F) -> Result<T, ApiError>
where
    F: FnOnce(&AppState) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let state = Arc::clone(state);
    tokio::task::spawn_blocking(move || work(&state)).await?
}
