//! Opaque bearer credential issued by the authentication backend.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use std::fmt;

use crate::store::SessionError;

/// A non-empty bearer token.
///
/// `Debug` is redacted so a token never lands in a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token string.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyToken`] for empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, SessionError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header of an authenticated request.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}
