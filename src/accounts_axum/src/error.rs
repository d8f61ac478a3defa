use accounts_application::AccountError;
use axum::{
    body::Body,
    response::{IntoResponse, Response},
};
use http::{HeaderValue, StatusCode, header::CONTENT_TYPE};
use serde::Serialize;
use thiserror::Error;

use crate::extract::DecodeError;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Route an error came from. Decides the developer hints in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    GetById,
    GetByCredentials,
    Update,
    Delete,
}

impl Operation {
    fn decode_hint(self) -> &'static str {
        match self {
            Operation::Create => "invalid request body",
            Operation::Update => "please, fix your request body",
            _ => "",
        }
    }

    fn validation_hint(self) -> &'static str {
        match self {
            Operation::Create => "input validation failed. please, provide valid values",
            Operation::Update => "you have provided invalid values",
            _ => "",
        }
    }

    fn wrong_password_hint(self) -> &'static str {
        match self {
            Operation::Update => "you entered wrong password",
            _ => "",
        }
    }
}

/// Error response sent as `{"message", "developerMessage", "code"}`.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
    developer_message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    message: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    developer_message: &'a str,
    code: u16,
}

impl ApiError {
    pub fn new(
        status: StatusCode,
        message: impl Into<String>,
        developer_message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            message: message.into(),
            developer_message: developer_message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>, developer_message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, developer_message)
    }

    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "requested resource is not found",
            "please, double check your request",
        )
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error",
            "something went wrong on the server side",
        )
    }

    /// Maps an account operation failure onto its status and messages.
    pub fn from_account_error(err: AccountError, operation: Operation) -> Self {
        match err {
            AccountError::Validation(errors) => {
                Self::bad_request(errors.to_string(), operation.validation_hint())
            }
            AccountError::PasswordsDoNotMatch => {
                Self::bad_request(err.to_string(), "provided passwords must to match")
            }
            AccountError::EmailTaken | AccountError::InvalidId => {
                Self::bad_request(err.to_string(), "")
            }
            AccountError::WrongPassword => {
                Self::bad_request(err.to_string(), operation.wrong_password_hint())
            }
            AccountError::NotFound => Self::not_found(),
            AccountError::Internal(cause) => {
                tracing::error!(?operation, %cause, "account operation failed");
                Self::internal()
            }
        }
    }

    /// Maps a body decoding failure for `operation`.
    pub fn from_decode_error(err: DecodeError, operation: Operation) -> Self {
        match err {
            DecodeError::Invalid(message) => Self::bad_request(message, operation.decode_hint()),
            other => Self::from(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn developer_message(&self) -> &str {
        &self.developer_message
    }
}

impl From<DecodeError> for ApiError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Invalid(message) => Self::bad_request(message, ""),
            DecodeError::Unreadable(rejection) => {
                Self::new(rejection.status(), rejection.body_text(), "")
            }
        }
    }
}

// Extractor rejections go out in the same envelope as every other error.
impl IntoResponse for DecodeError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = Envelope {
            message: &self.message,
            developer_message: &self.developer_message,
            code: self.status.as_u16(),
        };
        json_response(self.status, &envelope)
    }
}

/// Serializes `body` with the service's JSON content type.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => {
            let mut response = Response::new(Body::from(bytes));
            *response.status_mut() = status;
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
            response
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response body");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
