//! In-memory identity provider.
//!
//! Holds every user created at login plus the open sessions. One instance
//! serves three ports: `IdentityProvider`, `SessionValidator` and
//! `ContactResolver`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::exchange::ContactUnresolved;
use crate::domain::foundation::{AuthError, SessionToken, UserId};
use crate::domain::user::User;
use crate::ports::{ContactResolver, IdentityProvider, LoginResult, SessionValidator};

#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityProvider {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    sessions: Arc<RwLock<HashMap<String, UserId>>>,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an existing user without opening a session (used for seed data).
    pub async fn register(&self, user: User) {
        self.users.write().await.insert(user.id().clone(), user);
    }

    /// Number of open sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn login(
        &self,
        display_name: &str,
        contact_info: &str,
    ) -> Result<LoginResult, AuthError> {
        let user = User::register(display_name, contact_info)
            .map_err(|e| AuthError::InvalidInput(e.to_string()))?;
        let token = SessionToken::issue();

        self.users
            .write()
            .await
            .insert(user.id().clone(), user.clone());
        self.sessions
            .write()
            .await
            .insert(token.as_str().to_string(), user.id().clone());

        tracing::info!(user_id = %user.id(), "User logged in");
        Ok(LoginResult { user, token })
    }

    async fn logout(&self, token: &SessionToken) -> Result<(), AuthError> {
        if let Some(user_id) = self.sessions.write().await.remove(token.as_str()) {
            tracing::info!(user_id = %user_id, "User logged out");
        }
        Ok(())
    }
}

#[async_trait]
impl SessionValidator for InMemoryIdentityProvider {
    async fn validate(&self, token: &str) -> Result<User, AuthError> {
        let user_id = self
            .sessions
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)?;

        self.users
            .read()
            .await
            .get(&user_id)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[async_trait]
impl ContactResolver for InMemoryIdentityProvider {
    async fn resolve_contact(&self, user_id: &UserId) -> Result<String, ContactUnresolved> {
        self.users
            .read()
            .await
            .get(user_id)
            .map(|u| u.contact_info().to_string())
            .ok_or_else(|| ContactUnresolved::new(user_id.clone()))
    }
}
