use accounts_core::{Account, AccountStore, AccountStoreError, CancellationToken};
use secrecy::Secret;

use crate::{AccountError, blocking::run_blocking};

/// Looks an account up by its credentials.
pub struct AuthenticateAccountUseCase<'a, S>
where
    S: AccountStore,
{
    store: &'a S,
}

impl<'a, S> AuthenticateAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The email is checked first: an unknown email is
    /// [`AccountError::NotFound`] whatever the password.
    #[tracing::instrument(name = "AuthenticateAccountUseCase::execute", skip(self, password, cancel))]
    pub async fn execute(
        &self,
        email: &str,
        password: Secret<String>,
        cancel: &CancellationToken,
    ) -> Result<Account, AccountError> {
        let account = self
            .store
            .find_by_email(email, cancel)
            .await
            .map_err(|e| match e {
                AccountStoreError::AccountNotFound => AccountError::NotFound,
                other => AccountError::unexpected(other),
            })?;

        let (account, matches) = run_blocking(move || {
            let matches = account.verify_password(&password);
            (account, matches)
        })
        .await?;

        if !matches {
            return Err(AccountError::WrongPassword);
        }

        Ok(account)
    }
}
