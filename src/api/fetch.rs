use crate::api::client::UsersClient;
use crate::cancel::CancelToken;
use crate::store::{Dispatch, UserAction};

/// How a fetch invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(usize),
    Failed,
    /// No terminal action was dispatched.
    Cancelled,
}

/// Load the user list into the store.
///
/// Dispatches `FetchRequest` up front, then exactly one of `FetchSuccess` or
/// `FetchFailure`, unless `cancel` fires first. An already-cancelled token
/// dispatches nothing.
pub async fn fetch_users<D>(
    client: &UsersClient,
    dispatcher: &mut D,
    cancel: &CancelToken,
) -> FetchOutcome
where
    D: Dispatch<UserAction>,
{
    if cancel.is_cancelled() {
        tracing::debug!("fetch skipped, token already cancelled");
        return FetchOutcome::Cancelled;
    }

    dispatcher.dispatch(UserAction::FetchRequest);
    tracing::info!(url = client.url(), "fetching users");

    let result = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::info!("fetch cancelled before completion");
            return FetchOutcome::Cancelled;
        }
        result = client.list_users() => result,
    };

    match result {
        Ok(users) => {
            let count = users.len();
            tracing::info!(count, "users fetched");
            dispatcher.dispatch(UserAction::FetchSuccess(users));
            FetchOutcome::Loaded(count)
        }
        Err(err) => {
            tracing::warn!(error = %err, transport = err.is_transport(), "fetch failed");
            dispatcher.dispatch(UserAction::FetchFailure(err.to_string()));
            FetchOutcome::Failed
        }
    }
}
