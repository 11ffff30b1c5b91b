//! Session validation port.
//!
//! HTTP middleware uses this to turn a bearer token into the `User` it was
//! issued for.

use async_trait::async_trait;

use crate::domain::foundation::AuthError;
use crate::domain::user::User;

/// Validates session tokens and returns the user they belong to.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for unknown or logged-out tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<User, AuthError>;
}
