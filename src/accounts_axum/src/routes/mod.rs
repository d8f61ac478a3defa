//! Account route handlers.
//!
//! Each handler creates a cancellation token for the request. Dropping the
//! handler future (client gone, timeout layer fired) cancels it, which stops
//! any store call still in flight.

pub mod create_account;
pub mod delete_account;
pub mod get_account;
pub mod get_account_by_credentials;
pub mod update_account;

pub use create_account::create_account;
pub use delete_account::delete_account;
pub use get_account::get_account;
pub use get_account_by_credentials::get_account_by_credentials;
pub use update_account::update_account;

use tokio_util::sync::{CancellationToken, DropGuard};

/// Token for one request, cancelled when the returned guard is dropped.
pub(crate) fn request_token() -> (CancellationToken, DropGuard) {
    let token = CancellationToken::new();
    let guard = token.clone().drop_guard();
    (token, guard)
}
