//! Axum HTTP adapter for the account service.
//!
//! Handlers are generic over the [`AccountStore`](accounts_core::AccountStore)
//! behind the [`AccountService`](accounts_application::AccountService) they
//! receive as state:
//!
//! ```ignore
//! use accounts_axum::routes;
//!
//! let app = Router::new()
//!     .route("/api/users", post(routes::create_account::<S>))
//!     .route("/api/users/{uuid}", get(routes::get_account::<S>))
//!     .with_state(service);
//! ```

pub mod error;
pub mod extract;
pub mod routes;

pub use error::{ApiError, Operation};
pub use extract::{DecodeError, StrictJson};
