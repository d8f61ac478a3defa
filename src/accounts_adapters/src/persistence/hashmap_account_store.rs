use std::collections::HashMap;
use std::sync::Arc;

use accounts_core::{Account, AccountId, AccountStore, AccountStoreError, NewAccount};
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// In-memory account store.
///
/// Mints the same 24-hex ids as [`MongoAccountStore`](super::mongo_account_store::MongoAccountStore)
/// and enforces unique emails on insert and update.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn check_id(id: &AccountId) -> Result<(), AccountStoreError> {
    ObjectId::parse_str(id.as_str())
        .map(|_| ())
        .map_err(|_| AccountStoreError::InvalidId)
}

fn check_cancel(cancel: &CancellationToken) -> Result<(), AccountStoreError> {
    if cancel.is_cancelled() {
        return Err(AccountStoreError::Cancelled);
    }
    Ok(())
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn create(
        &self,
        account: NewAccount,
        cancel: &CancellationToken,
    ) -> Result<AccountId, AccountStoreError> {
        check_cancel(cancel)?;
        let mut accounts = self.accounts.write().await;
        if accounts.values().any(|a| a.email == account.email) {
            return Err(AccountStoreError::AccountAlreadyExists);
        }

        let id = AccountId::new(ObjectId::new().to_hex());
        accounts.insert(id.clone(), account.with_id(id.clone()));
        Ok(id)
    }

    async fn find_by_email(
        &self,
        email: &str,
        cancel: &CancellationToken,
    ) -> Result<Account, AccountStoreError> {
        check_cancel(cancel)?;
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|a| a.email == email)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn find_by_id(
        &self,
        id: &AccountId,
        cancel: &CancellationToken,
    ) -> Result<Account, AccountStoreError> {
        check_id(id)?;
        check_cancel(cancel)?;
        let accounts = self.accounts.read().await;
        accounts
            .get(id)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn update_partially(
        &self,
        account: &Account,
        cancel: &CancellationToken,
    ) -> Result<(), AccountStoreError> {
        check_id(&account.id)?;
        check_cancel(cancel)?;
        let mut accounts = self.accounts.write().await;
        if accounts
            .values()
            .any(|a| a.id != account.id && a.email == account.email)
        {
            return Err(AccountStoreError::AccountAlreadyExists);
        }

        let stored = accounts
            .get_mut(&account.id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        *stored = account.clone();
        Ok(())
    }

    async fn delete(
        &self,
        id: &AccountId,
        cancel: &CancellationToken,
    ) -> Result<(), AccountStoreError> {
        check_id(id)?;
        check_cancel(cancel)?;
        let mut accounts = self.accounts.write().await;
        accounts.remove(id).ok_or(AccountStoreError::AccountNotFound)?;
        Ok(())
    }
}
