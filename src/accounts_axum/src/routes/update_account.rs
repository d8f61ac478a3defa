use accounts_application::AccountService;
use accounts_core::{AccountId, AccountStore, UpdateAccountRequest};
use axum::extract::{Path, State};
use http::StatusCode;
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    error::{ApiError, Operation},
    extract::{DecodeError, StrictJson},
    routes::request_token,
};

/// Body of `PATCH /api/users/{uuid}`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateAccountBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub old_password: Option<Secret<String>>,
    #[serde(default)]
    pub new_password: Option<Secret<String>>,
}

impl UpdateAccountBody {
    pub fn into_request(self, id: AccountId) -> UpdateAccountRequest {
        UpdateAccountRequest {
            id,
            email: self.email,
            username: self.username,
            old_password: self.old_password,
            new_password: self.new_password,
        }
    }
}

/// `PATCH /api/users/{uuid}` - the path id wins over anything in the body.
#[tracing::instrument(name = "Update account", skip(service, body))]
pub async fn update_account<S>(
    State(service): State<AccountService<S>>,
    Path(uuid): Path<String>,
    body: Result<StrictJson<Option<UpdateAccountBody>>, DecodeError>,
) -> Result<StatusCode, ApiError>
where
    S: AccountStore + 'static,
{
    let StrictJson(body) = body.map_err(|e| ApiError::from_decode_error(e, Operation::Update))?;
    // A literal `null` body reads as an empty object.
    let body = body.unwrap_or_default();
    let (cancel, _guard) = request_token();

    service
        .update_partially(body.into_request(AccountId::new(uuid)), &cancel)
        .await
        .map_err(|e| ApiError::from_account_error(e, Operation::Update))?;

    Ok(StatusCode::OK)
}
