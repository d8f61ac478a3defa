use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use accounts_core::{
    Account, AccountId, AccountStore, AccountStoreError, CancellationToken, CreateAccountRequest,
    NewAccount,
};
use secrecy::Secret;
use tokio::sync::RwLock;

pub(crate) fn secret(s: &str) -> Secret<String> {
    Secret::new(s.to_string())
}

pub(crate) fn create_request(email: &str) -> CreateAccountRequest {
    CreateAccountRequest {
        email: email.to_string(),
        username: "test".to_string(),
        password: secret("qwerty"),
        repeat_password: secret("qwerty"),
    }
}

// Mock account store for testing
#[derive(Clone, Default)]
pub(crate) struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
    next_id: Arc<AtomicU64>,
    // Simulates a lookup that misses a concurrent insert.
    hide_emails: bool,
}

impl MockAccountStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn hiding_emails(mut self) -> Self {
        self.hide_emails = true;
        self
    }

    pub(crate) async fn get(&self, id: &AccountId) -> Option<Account> {
        self.accounts.read().await.get(id).cloned()
    }

    pub(crate) async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub(crate) async fn insert(&self, account: NewAccount) -> AccountId {
        self.create(account, &CancellationToken::new())
            .await
            .expect("mock insert")
    }
}

#[async_trait::async_trait]
impl AccountStore for MockAccountStore {
    async fn create(
        &self,
        account: NewAccount,
        _cancel: &CancellationToken,
    ) -> Result<AccountId, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.values().any(|a| a.email == account.email) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }
        let id = AccountId::new(format!(
            "{:024x}",
            self.next_id.fetch_add(1, Ordering::SeqCst) + 1
        ));
        accounts.insert(id.clone(), account.with_id(id.clone()));
        Ok(id)
    }

    async fn find_by_email(
        &self,
        email: &str,
        _cancel: &CancellationToken,
    ) -> Result<Account, AccountStoreError> {
        if self.hide_emails {
            return Err(AccountStoreError::AccountNotFound);
        }
        self.accounts
            .read()
            .await
            .values()
            .find(|a| a.email == email)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn find_by_id(
        &self,
        id: &AccountId,
        _cancel: &CancellationToken,
    ) -> Result<Account, AccountStoreError> {
        if id.as_str().len() != 24 {
            return Err(AccountStoreError::InvalidId);
        }
        self.get(id).await.ok_or(AccountStoreError::AccountNotFound)
    }

    async fn update_partially(
        &self,
        account: &Account,
        _cancel: &CancellationToken,
    ) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&account.id) {
            Some(stored) => {
                *stored = account.clone();
                Ok(())
            }
            None => Err(AccountStoreError::AccountNotFound),
        }
    }

    async fn delete(
        &self,
        id: &AccountId,
        _cancel: &CancellationToken,
    ) -> Result<(), AccountStoreError> {
        if id.as_str().len() != 24 {
            return Err(AccountStoreError::InvalidId);
        }
        self.accounts
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(AccountStoreError::AccountNotFound)
    }
}

/// Store whose every call fails with the same kind of error.
pub(crate) struct FailingStore(pub(crate) AccountStoreError);

impl FailingStore {
    fn error(&self) -> AccountStoreError {
        match &self.0 {
            AccountStoreError::AccountAlreadyExists => AccountStoreError::AccountAlreadyExists,
            AccountStoreError::AccountNotFound => AccountStoreError::AccountNotFound,
            AccountStoreError::InvalidId => AccountStoreError::InvalidId,
            AccountStoreError::Cancelled => AccountStoreError::Cancelled,
            AccountStoreError::TimedOut => AccountStoreError::TimedOut,
            AccountStoreError::UnexpectedError(msg) => {
                AccountStoreError::UnexpectedError(msg.clone())
            }
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for FailingStore {
    async fn create(
        &self,
        _account: NewAccount,
        _cancel: &CancellationToken,
    ) -> Result<AccountId, AccountStoreError> {
        Err(self.error())
    }

    async fn find_by_email(
        &self,
        _email: &str,
        _cancel: &CancellationToken,
    ) -> Result<Account, AccountStoreError> {
        Err(self.error())
    }

    async fn find_by_id(
        &self,
        _id: &AccountId,
        _cancel: &CancellationToken,
    ) -> Result<Account, AccountStoreError> {
        Err(self.error())
    }

    async fn update_partially(
        &self,
        _account: &Account,
        _cancel: &CancellationToken,
    ) -> Result<(), AccountStoreError> {
        Err(self.error())
    }

    async fn delete(
        &self,
        _id: &AccountId,
        _cancel: &CancellationToken,
    ) -> Result<(), AccountStoreError> {
        Err(self.error())
    }
}
