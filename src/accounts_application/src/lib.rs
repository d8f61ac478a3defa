//! Account use cases on top of the [`AccountStore`](accounts_core::AccountStore) port.
//!
//! Each operation lives in its own module under [`use_cases`]; [`AccountService`]
//! bundles them behind a cloneable handle that HTTP handlers share.

pub mod error;
pub mod service;
pub mod use_cases;

mod blocking;
#[cfg(test)]
mod test_support;

pub use error::AccountError;
pub use service::AccountService;
pub use use_cases::{
    authenticate_account::AuthenticateAccountUseCase, create_account::CreateAccountUseCase,
    delete_account::DeleteAccountUseCase, get_account::GetAccountUseCase,
    update_account::UpdateAccountUseCase,
};
