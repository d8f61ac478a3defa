use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::domain::account::{Account, AccountId, NewAccount};

#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AccountAlreadyExists,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Invalid account id")]
    InvalidId,
    #[error("Operation cancelled")]
    Cancelled,
    #[error("Operation timed out")]
    TimedOut,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AccountAlreadyExists, Self::AccountAlreadyExists) => true,
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::InvalidId, Self::InvalidId) => true,
            (Self::Cancelled, Self::Cancelled) => true,
            (Self::TimedOut, Self::TimedOut) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Persistence port for accounts.
///
/// Every call takes the caller's cancellation token; implementations stop
/// waiting on the backing store once it fires and return
/// [`AccountStoreError::Cancelled`].
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persists `account` and returns the id the store assigned to it.
    async fn create(
        &self,
        account: NewAccount,
        cancel: &CancellationToken,
    ) -> Result<AccountId, AccountStoreError>;
    async fn find_by_email(
        &self,
        email: &str,
        cancel: &CancellationToken,
    ) -> Result<Account, AccountStoreError>;
    async fn find_by_id(
        &self,
        id: &AccountId,
        cancel: &CancellationToken,
    ) -> Result<Account, AccountStoreError>;
    /// Overwrites the stored record with the same id. Zero matches is
    /// [`AccountStoreError::AccountNotFound`].
    async fn update_partially(
        &self,
        account: &Account,
        cancel: &CancellationToken,
    ) -> Result<(), AccountStoreError>;
    async fn delete(
        &self,
        id: &AccountId,
        cancel: &CancellationToken,
    ) -> Result<(), AccountStoreError>;
}
