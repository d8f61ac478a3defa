use argon2::{
    Argon2, PasswordVerifier,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hashing(String),
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// One-way Argon2 hash of an account password in PHC string format.
///
/// The salt is generated per hash and embedded in the PHC string, so two
/// hashes of the same plaintext never compare equal.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    /// Hashes `plaintext` with the library's default Argon2 parameters.
    pub fn compute(plaintext: &Secret<String>) -> Result<Self, PasswordError> {
        let salt = SaltString::generate(rand_core::OsRng);

        Argon2::default()
            .hash_password(plaintext.expose_secret().as_bytes(), &salt)
            .map(|hash| Self(Secret::new(hash.to_string())))
            .map_err(|e| PasswordError::Hashing(e.to_string()))
    }

    /// Wraps a previously stored PHC string after checking it parses.
    pub fn parse(phc: String) -> Result<Self, PasswordError> {
        password_hash::PasswordHash::new(&phc)
            .map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        Ok(Self(Secret::new(phc)))
    }

    /// Returns true iff `candidate` is the plaintext this hash was computed from.
    pub fn matches(&self, candidate: &Secret<String>) -> bool {
        let Ok(parsed) = password_hash::PasswordHash::new(self.0.expose_secret()) else {
            return false;
        };

        Argon2::default()
            .verify_password(candidate.expose_secret().as_bytes(), &parsed)
            .is_ok()
    }

    pub fn as_phc(&self) -> &str {
        self.0.expose_secret()
    }
}

impl PartialEq for PasswordHash {
    fn eq(&self, other: &Self) -> bool {
        self.as_phc() == other.as_phc()
    }
}

impl Eq for PasswordHash {}
