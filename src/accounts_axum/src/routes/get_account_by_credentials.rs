use accounts_application::AccountService;
use accounts_core::AccountStore;
use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Response,
};
use http::StatusCode;
use secrecy::{ExposeSecret, Secret};

use crate::{
    error::{ApiError, Operation, json_response},
    routes::request_token,
};

/// `email` and `password` from the query string. A repeated key keeps its
/// first value.
#[derive(Debug, Default)]
pub struct Credentials {
    pub email: String,
    pub password: Option<Secret<String>>,
}

impl Credentials {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut email = None;
        let mut password = None;
        for (key, value) in pairs {
            match key.as_str() {
                "email" => {
                    email.get_or_insert(value);
                }
                "password" => {
                    password.get_or_insert_with(|| Secret::new(value));
                }
                _ => {}
            }
        }

        Self {
            email: email.unwrap_or_default(),
            password,
        }
    }
}

/// `GET /api/users?email=&password=`
#[tracing::instrument(name = "Get account by credentials", skip_all)]
pub async fn get_account_by_credentials<S>(
    State(service): State<AccountService<S>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError>
where
    S: AccountStore + 'static,
{
    let Query(pairs) =
        query.map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text(), ""))?;
    let credentials = Credentials::from_pairs(pairs);

    let password = credentials
        .password
        .filter(|p| !p.expose_secret().is_empty());
    let (email, password) = match (credentials.email, password) {
        (email, Some(password)) if !email.is_empty() => (email, password),
        _ => {
            return Err(ApiError::bad_request(
                "empty email or password",
                "email and password must be provided",
            ));
        }
    };
    let (cancel, _guard) = request_token();

    let account = service
        .get_by_email_and_password(&email, password, &cancel)
        .await
        .map_err(|e| ApiError::from_account_error(e, Operation::GetByCredentials))?;

    Ok(json_response(StatusCode::OK, &account))
}
