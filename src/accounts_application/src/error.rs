use accounts_core::{AccountStoreError, PasswordError, ValidationErrors};
use thiserror::Error;

/// Outcomes of account operations other than success.
///
/// Storage errors never cross this boundary as-is: each use case narrows
/// them into one of these kinds.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("passwords don't match")]
    PasswordsDoNotMatch,
    #[error("email already taken")]
    EmailTaken,
    #[error("wrong email or password")]
    WrongPassword,
    #[error("invalid uuid")]
    InvalidId,
    #[error("requested resource is not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Wraps a storage failure the caller has no specific mapping for.
    pub(crate) fn unexpected(err: AccountStoreError) -> Self {
        tracing::warn!(error = %err, "account store failure");
        Self::Internal(err.to_string())
    }

    /// Maps the lookup failures every id-based operation shares.
    pub(crate) fn from_lookup(err: AccountStoreError) -> Self {
        match err {
            AccountStoreError::AccountNotFound => Self::NotFound,
            AccountStoreError::InvalidId => Self::InvalidId,
            other => Self::unexpected(other),
        }
    }
}

impl From<ValidationErrors> for AccountError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<PasswordError> for AccountError {
    fn from(err: PasswordError) -> Self {
        tracing::warn!(error = %err, "password hashing failed");
        Self::Internal(err.to_string())
    }
}

impl PartialEq for AccountError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::PasswordsDoNotMatch, Self::PasswordsDoNotMatch) => true,
            (Self::EmailTaken, Self::EmailTaken) => true,
            (Self::WrongPassword, Self::WrongPassword) => true,
            (Self::InvalidId, Self::InvalidId) => true,
            (Self::NotFound, Self::NotFound) => true,
            (Self::Internal(_), Self::Internal(_)) => true,
            _ => false,
        }
    }
}
