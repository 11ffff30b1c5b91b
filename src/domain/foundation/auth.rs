//! Authentication types for the domain layer.
//!
//! Sessions are opaque bearer tokens handed out at login. The domain only
//! knows that a token maps to a `User`; how that mapping is stored is up to
//! the identity adapter.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Opaque bearer token identifying a login session.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Issues a fresh random token.
    pub fn issue() -> Self {
        Self(format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple()))
    }

    /// Wraps a token received from a client.
    pub fn from_string(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are credentials; keep them out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Authentication errors that can occur during login or token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, unknown, or was logged out.
    #[error("Invalid or expired session")]
    InvalidToken,

    /// Login fields failed validation.
    #[error("Invalid login: {0}")]
    InvalidInput(String),

    /// The identity service is unavailable.
    #[error("Identity service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the caller should log in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_are_unique() {
        assert_ne!(SessionToken::issue(), SessionToken::issue());
    }

    #[test]
    fn debug_output_hides_token() {
        let token = SessionToken::from_string("secret-token");
        assert!(!format!("{:?}", token).contains("secret"));
    }

    #[test]
    fn only_invalid_token_requires_reauthentication() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(!AuthError::service_unavailable("down").requires_reauthentication());
        assert!(!AuthError::InvalidInput("x".into()).requires_reauthentication());
    }
}
