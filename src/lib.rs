//! # Accounts - User Account Service Library
//!
//! Facade crate that re-exports the public APIs of the account service
//! components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `NewAccount`, `AccountId`, request types
//!   and validation
//! - **Storage port**: `AccountStore`
//! - **Use cases**: `CreateAccountUseCase`, `UpdateAccountUseCase`, etc., bundled
//!   by `AccountService`
//! - **Adapters**: `HashMapAccountStore`, `MongoAccountStore`, `Settings` and the
//!   axum handlers
//! - **Service**: `AccountsService`, the HTTP server entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use accounts_core::*;
}

pub use accounts_core::{
    Account, AccountId, CreateAccountRequest, NewAccount, PasswordError, PasswordHash, Role,
    UpdateAccountRequest, ValidationErrors,
};

// ============================================================================
// Storage Port
// ============================================================================

pub use accounts_core::{AccountStore, AccountStoreError, CancellationToken};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use accounts_application::*;
}

pub use accounts_application::{
    AccountError, AccountService, AuthenticateAccountUseCase, CreateAccountUseCase,
    DeleteAccountUseCase, GetAccountUseCase, UpdateAccountUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and error envelope
    pub mod http {
        pub use accounts_axum::*;
    }

    /// Store implementations
    pub mod persistence {
        pub use accounts_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use accounts_adapters::config::*;
    }
}

pub use accounts_adapters::{HashMapAccountStore, MongoAccountStore, Settings};

// ============================================================================
// Accounts Service (Main Entry Point)
// ============================================================================

pub use accounts_service::{AccountsService, ServerError};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing [`AccountStore`]
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
