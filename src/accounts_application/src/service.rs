use std::sync::Arc;

use accounts_core::{
    Account, AccountId, AccountStore, CancellationToken, CreateAccountRequest,
    UpdateAccountRequest,
};
use secrecy::Secret;

use crate::{
    AccountError, AuthenticateAccountUseCase, CreateAccountUseCase, DeleteAccountUseCase,
    GetAccountUseCase, UpdateAccountUseCase,
};

/// Shared entry point to the account use cases.
///
/// Holds no state of its own besides the store, so clones are cheap and can
/// be handed to every request handler.
pub struct AccountService<S>
where
    S: AccountStore,
{
    store: Arc<S>,
}

impl<S> Clone for AccountService<S>
where
    S: AccountStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> AccountService<S>
where
    S: AccountStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn create(
        &self,
        request: CreateAccountRequest,
        cancel: &CancellationToken,
    ) -> Result<AccountId, AccountError> {
        CreateAccountUseCase::new(self.store.as_ref())
            .execute(request, cancel)
            .await
    }

    pub async fn get_by_email_and_password(
        &self,
        email: &str,
        password: Secret<String>,
        cancel: &CancellationToken,
    ) -> Result<Account, AccountError> {
        AuthenticateAccountUseCase::new(self.store.as_ref())
            .execute(email, password, cancel)
            .await
    }

    pub async fn get_by_id(
        &self,
        id: &AccountId,
        cancel: &CancellationToken,
    ) -> Result<Account, AccountError> {
        GetAccountUseCase::new(self.store.as_ref())
            .execute(id, cancel)
            .await
    }

    pub async fn update_partially(
        &self,
        request: UpdateAccountRequest,
        cancel: &CancellationToken,
    ) -> Result<(), AccountError> {
        UpdateAccountUseCase::new(self.store.as_ref())
            .execute(request, cancel)
            .await
    }

    pub async fn delete(
        &self,
        id: &AccountId,
        cancel: &CancellationToken,
    ) -> Result<(), AccountError> {
        DeleteAccountUseCase::new(self.store.as_ref())
            .execute(id, cancel)
            .await
    }
}
