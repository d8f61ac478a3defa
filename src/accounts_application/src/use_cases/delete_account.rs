use accounts_core::{AccountId, AccountStore, CancellationToken};

use crate::AccountError;

/// Delete account use case - removes an account permanently
pub struct DeleteAccountUseCase<'a, S>
where
    S: AccountStore,
{
    store: &'a S,
}

impl<'a, S> DeleteAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Storage failures other than a missing or malformed id surface as
    /// [`AccountError::Internal`].
    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip(self, cancel))]
    pub async fn execute(
        &self,
        id: &AccountId,
        cancel: &CancellationToken,
    ) -> Result<(), AccountError> {
        self.store
            .delete(id, cancel)
            .await
            .map_err(AccountError::from_lookup)
    }
}
