use accounts_core::{Account, AccountId, AccountStore, CancellationToken};

use crate::AccountError;

pub struct GetAccountUseCase<'a, S>
where
    S: AccountStore,
{
    store: &'a S,
}

impl<'a, S> GetAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "GetAccountUseCase::execute", skip(self, cancel))]
    pub async fn execute(
        &self,
        id: &AccountId,
        cancel: &CancellationToken,
    ) -> Result<Account, AccountError> {
        self.store
            .find_by_id(id, cancel)
            .await
            .map_err(AccountError::from_lookup)
    }
}
