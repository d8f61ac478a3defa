use accounts_core::{AccountStore, AccountStoreError, CancellationToken, UpdateAccountRequest};
use secrecy::Secret;

use crate::{AccountError, blocking::run_blocking};

/// Update account use case - applies a partial update confirmed by the
/// current password
pub struct UpdateAccountUseCase<'a, S>
where
    S: AccountStore,
{
    store: &'a S,
}

impl<'a, S> UpdateAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Fields left `None` in the request keep their stored value.
    ///
    /// The request is validated before the account is read, so a rejected
    /// update never touches storage beyond that point.
    #[tracing::instrument(
        name = "UpdateAccountUseCase::execute",
        skip(self, request, cancel),
        fields(id = %request.id)
    )]
    pub async fn execute(
        &self,
        request: UpdateAccountRequest,
        cancel: &CancellationToken,
    ) -> Result<(), AccountError> {
        request.validate()?;

        let UpdateAccountRequest {
            id,
            email,
            username,
            old_password,
            new_password,
        } = request;
        let old_password = old_password.unwrap_or_else(|| Secret::new(String::new()));

        let account = self
            .store
            .find_by_id(&id, cancel)
            .await
            .map_err(AccountError::from_lookup)?;

        let mut account = run_blocking(move || {
            if !account.verify_password(&old_password) {
                return Err(AccountError::WrongPassword);
            }
            let mut account = account;
            if let Some(new_password) = new_password {
                account.set_password(&new_password)?;
            }
            Ok(account)
        })
        .await??;

        if let Some(email) = email {
            account.email = email;
        }
        if let Some(username) = username {
            account.username = username;
        }

        self.store
            .update_partially(&account, cancel)
            .await
            .map_err(|e| match e {
                AccountStoreError::AccountAlreadyExists => AccountError::EmailTaken,
                other => AccountError::from_lookup(other),
            })
    }
}
