//! Identity provider port.
//!
//! Produces a `User` from a display name and a contact string. There is no
//! password and no verification; the returned token is the only credential.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, SessionToken};
use crate::domain::user::User;

/// A successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: SessionToken,
}

/// Creates users and manages their sessions.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a user with a fresh id and open a session for them.
    ///
    /// Both fields are trimmed; names are not required to be unique.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if either field is blank
    async fn login(&self, display_name: &str, contact_info: &str)
        -> Result<LoginResult, AuthError>;

    /// Discard the session. The user record and their wishes are untouched.
    ///
    /// Logging out an unknown token is not an error.
    async fn logout(&self, token: &SessionToken) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn IdentityProvider) {}
    }
}
