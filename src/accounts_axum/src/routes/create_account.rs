use accounts_application::AccountService;
use accounts_core::{AccountId, AccountStore, CreateAccountRequest};
use axum::{extract::State, response::Response};
use http::StatusCode;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, Operation, json_response},
    extract::{DecodeError, StrictJson},
    routes::request_token,
};

/// Body of `POST /api/users`. Missing or `null` fields read as empty and
/// are reported by validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateAccountBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
    #[serde(default)]
    pub repeat_password: Option<Secret<String>>,
}

impl From<CreateAccountBody> for CreateAccountRequest {
    fn from(body: CreateAccountBody) -> Self {
        let empty = || Secret::new(String::new());
        Self {
            email: body.email.unwrap_or_default(),
            username: body.username.unwrap_or_default(),
            password: body.password.unwrap_or_else(empty),
            repeat_password: body.repeat_password.unwrap_or_else(empty),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedAccount {
    pub id: AccountId,
}

/// `POST /api/users` - registers an account, answering 201 with its id.
#[tracing::instrument(name = "Create account", skip_all)]
pub async fn create_account<S>(
    State(service): State<AccountService<S>>,
    body: Result<StrictJson<Option<CreateAccountBody>>, DecodeError>,
) -> Result<Response, ApiError>
where
    S: AccountStore + 'static,
{
    let StrictJson(body) = body.map_err(|e| ApiError::from_decode_error(e, Operation::Create))?;
    // A literal `null` body reads as an empty object.
    let body = body.unwrap_or_default();
    let (cancel, _guard) = request_token();

    let id = service
        .create(body.into(), &cancel)
        .await
        .map_err(|e| ApiError::from_account_error(e, Operation::Create))?;

    Ok(json_response(StatusCode::CREATED, &CreatedAccount { id }))
}
