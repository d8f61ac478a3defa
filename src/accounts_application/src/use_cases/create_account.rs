use accounts_core::{
    AccountId, AccountStore, AccountStoreError, CancellationToken, CreateAccountRequest,
    NewAccount,
};

use crate::{AccountError, blocking::run_blocking};

/// Create account use case - registers a new, unverified account
pub struct CreateAccountUseCase<'a, S>
where
    S: AccountStore,
{
    store: &'a S,
}

impl<'a, S> CreateAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validates the request, rejects taken emails and stores the account
    /// with its password hashed.
    ///
    /// A duplicate reported by the store at insert time is also
    /// [`AccountError::EmailTaken`], which covers concurrent creates that
    /// both passed the lookup.
    #[tracing::instrument(
        name = "CreateAccountUseCase::execute",
        skip(self, request, cancel),
        fields(email = %request.email)
    )]
    pub async fn execute(
        &self,
        request: CreateAccountRequest,
        cancel: &CancellationToken,
    ) -> Result<AccountId, AccountError> {
        request.validate()?;
        if !request.passwords_match() {
            return Err(AccountError::PasswordsDoNotMatch);
        }

        match self.store.find_by_email(&request.email, cancel).await {
            Ok(_) => return Err(AccountError::EmailTaken),
            Err(AccountStoreError::AccountNotFound) => {}
            Err(e) => return Err(AccountError::unexpected(e)),
        }

        let CreateAccountRequest {
            email,
            username,
            password,
            ..
        } = request;
        let account =
            run_blocking(move || NewAccount::register(email, username, &password)).await??;

        self.store
            .create(account, cancel)
            .await
            .map_err(|e| match e {
                AccountStoreError::AccountAlreadyExists => AccountError::EmailTaken,
                other => AccountError::unexpected(other),
            })
    }
}
