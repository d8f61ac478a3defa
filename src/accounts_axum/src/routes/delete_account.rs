use accounts_application::AccountService;
use accounts_core::{AccountId, AccountStore};
use axum::extract::{Path, State};
use http::StatusCode;

use crate::{
    error::{ApiError, Operation},
    routes::request_token,
};

/// `DELETE /api/users/{uuid}` - 200 with an empty body once the account is gone.
#[tracing::instrument(name = "Delete account", skip(service))]
pub async fn delete_account<S>(
    State(service): State<AccountService<S>>,
    Path(uuid): Path<String>,
) -> Result<StatusCode, ApiError>
where
    S: AccountStore + 'static,
{
    let (cancel, _guard) = request_token();

    service
        .delete(&AccountId::new(uuid), &cancel)
        .await
        .map_err(|e| ApiError::from_account_error(e, Operation::Delete))?;

    Ok(StatusCode::OK)
}
