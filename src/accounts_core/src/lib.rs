pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountId, NewAccount, REGISTRATION_DATE_FORMAT, Role, registration_date},
    password::{PasswordError, PasswordHash},
    requests::{CreateAccountRequest, UpdateAccountRequest},
    validation::ValidationErrors,
};

pub use ports::account_store::{AccountStore, AccountStoreError};

pub use tokio_util::sync::CancellationToken;
