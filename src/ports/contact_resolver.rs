//! Contact resolver port.
//!
//! Looks up the contact string a user registered at login. The exchange
//! engine only ever calls this after a successful exchange.

use async_trait::async_trait;

use crate::domain::exchange::ContactUnresolved;
use crate::domain::foundation::UserId;

/// Resolves a user's contact information.
#[async_trait]
pub trait ContactResolver: Send + Sync {
    /// Returns the contact string for `user_id`, or `ContactUnresolved` if the
    /// user is unknown to this resolver.
    async fn resolve_contact(&self, user_id: &UserId) -> Result<String, ContactUnresolved>;
}
