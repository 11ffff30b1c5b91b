//! LogoutHandler - Command handler for discarding a session.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, CommandMetadata, SessionToken};
use crate::ports::IdentityProvider;

/// Command to end the caller's session.
#[derive(Debug, Clone)]
pub struct LogoutCommand {
    pub token: SessionToken,
}

/// Handler for logging out. Wishes and exchange records are untouched.
pub struct LogoutHandler {
    identity: Arc<dyn IdentityProvider>,
}

impl LogoutHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn handle(
        &self,
        cmd: LogoutCommand,
        metadata: CommandMetadata,
    ) -> Result<(), AuthError> {
        self.identity.logout(&cmd.token).await?;
        tracing::debug!(
            user_id = %metadata.user_id,
            correlation_id = %metadata.correlation_id(),
            "Session discarded"
        );
        Ok(())
    }
}
