use accounts_application::AccountService;
use accounts_core::{AccountId, AccountStore};
use axum::{
    extract::{Path, State},
    response::Response,
};
use http::StatusCode;

use crate::{
    error::{ApiError, Operation, json_response},
    routes::request_token,
};

/// `GET /api/users/{uuid}`
#[tracing::instrument(name = "Get account", skip(service))]
pub async fn get_account<S>(
    State(service): State<AccountService<S>>,
    Path(uuid): Path<String>,
) -> Result<Response, ApiError>
where
    S: AccountStore + 'static,
{
    let (cancel, _guard) = request_token();

    let account = service
        .get_by_id(&AccountId::new(uuid), &cancel)
        .await
        .map_err(|e| ApiError::from_account_error(e, Operation::GetById))?;

    Ok(json_response(StatusCode::OK, &account))
}
