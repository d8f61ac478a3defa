//! Strict JSON request bodies.
//!
//! Unlike [`axum::Json`], [`StrictJson`] does not look at the content type and
//! reports failures with messages meant for API clients.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Unreadable(#[from] BytesRejection),
}

/// A body holding exactly one JSON value that deserializes into `T`.
#[derive(Debug, Clone)]
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = DecodeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        decode(&bytes).map(StrictJson).map_err(DecodeError::Invalid)
    }
}

/// Decodes `bytes` as a single JSON value.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, String> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err("request body must not be empty".to_string());
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let path = err.path().to_string();
        describe(err.into_inner(), &path, bytes)
    })?;

    de.end()
        .map_err(|_| "request body must only contain single JSON value".to_string())?;

    Ok(value)
}

fn describe(err: serde_json::Error, path: &str, bytes: &[u8]) -> String {
    let message = err.to_string();
    if let Some(field) = unknown_field(&message) {
        return format!("request body contains unknown key \"{field}\"");
    }

    let at = offset(bytes, err.line(), err.column());
    match err.classify() {
        Category::Data if path != "." => {
            format!("request body contains incorrect JSON type for field \"{path}\"")
        }
        Category::Data => format!("request body contains incorrect JSON type (at character {at})"),
        Category::Syntax | Category::Eof | Category::Io => {
            format!("request body contains badly-formatted JSON (at character {at})")
        }
    }
}

fn unknown_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("unknown field `")?;
    rest.split('`').next()
}

// serde_json reports 1-based line and column; clients get a byte offset.
fn offset(bytes: &[u8], line: usize, column: usize) -> usize {
    let preceding: usize = bytes
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    preceding + column
}
