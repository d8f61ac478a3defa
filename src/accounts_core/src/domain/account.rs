use std::fmt;

use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::domain::password::{PasswordError, PasswordHash};

/// Format of [`Account::registered_at`], e.g. `2024/02/11`.
pub const REGISTRATION_DATE_FORMAT: &str = "%Y/%m/%d";

/// Renders the UTC calendar date of `now` the way accounts store it.
pub fn registration_date(now: DateTime<Utc>) -> String {
    now.format(REGISTRATION_DATE_FORMAT).to_string()
}

/// Opaque, store-assigned account identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Role reference carried by an account. Stored and returned as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "uuid")]
    pub id: String,
    #[serde(rename = "role")]
    pub name: String,
}

/// Account record as seen by the service once it has been persisted.
///
/// Serializes to the public JSON shape; the password hash is never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "uuid")]
    pub id: AccountId,
    pub email: String,
    pub username: String,
    #[serde(skip)]
    pub password: PasswordHash,
    pub verified: bool,
    pub registered_at: String,
    pub role: Option<Role>,
}

impl Account {
    /// Replaces the stored hash with a fresh hash of `plaintext`.
    pub fn set_password(&mut self, plaintext: &Secret<String>) -> Result<(), PasswordError> {
        self.password = PasswordHash::compute(plaintext)?;
        Ok(())
    }

    pub fn verify_password(&self, plaintext: &Secret<String>) -> bool {
        self.password.matches(plaintext)
    }
}

/// Account record before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub username: String,
    pub password: PasswordHash,
    pub verified: bool,
    pub registered_at: String,
    pub role: Option<Role>,
}

impl NewAccount {
    /// Builds an unverified account registered today (UTC) with `password` hashed.
    pub fn register(
        email: String,
        username: String,
        password: &Secret<String>,
    ) -> Result<Self, PasswordError> {
        Ok(Self {
            email,
            username,
            password: PasswordHash::compute(password)?,
            verified: false,
            registered_at: registration_date(Utc::now()),
            role: None,
        })
    }

    pub fn verify_password(&self, plaintext: &Secret<String>) -> bool {
        self.password.matches(plaintext)
    }

    pub fn with_id(self, id: AccountId) -> Account {
        Account {
            id,
            email: self.email,
            username: self.username,
            password: self.password,
            verified: self.verified,
            registered_at: self.registered_at,
            role: self.role,
        }
    }
}
