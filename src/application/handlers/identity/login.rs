//! LoginHandler - Command handler for creating a user and opening a session.

use std::sync::Arc;

use crate::domain::foundation::AuthError;
use crate::ports::{IdentityProvider, LoginResult};

/// Command to log in with a display name and contact.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub display_name: String,
    pub contact_info: String,
}

/// Handler for logging in.
pub struct LoginHandler {
    identity: Arc<dyn IdentityProvider>,
}

impl LoginHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn handle(&self, cmd: LoginCommand) -> Result<LoginResult, AuthError> {
        self.identity
            .login(&cmd.display_name, &cmd.contact_info)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionToken;
    use crate::domain::user::User;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockIdentityProvider {
        logins: Mutex<Vec<(String, String)>>,
    }

    impl MockIdentityProvider {
        fn new() -> Self {
            Self {
                logins: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for MockIdentityProvider {
        async fn login(
            &self,
            display_name: &str,
            contact_info: &str,
        ) -> Result<LoginResult, AuthError> {
            self.logins
                .lock()
                .unwrap()
                .push((display_name.to_string(), contact_info.to_string()));
            let user = User::register(display_name, contact_info)
                .map_err(|e| AuthError::InvalidInput(e.to_string()))?;
            Ok(LoginResult {
                user,
                token: SessionToken::from_string("tok"),
            })
        }

        async fn logout(&self, _token: &SessionToken) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn delegates_to_identity_provider() {
        let provider = Arc::new(MockIdentityProvider::new());
        let handler = LoginHandler::new(provider.clone());

        let result = handler
            .handle(LoginCommand {
                display_name: "Bob".to_string(),
                contact_info: "tg:@bob".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.user.display_name(), "Bob");
        assert_eq!(provider.logins.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_name_is_invalid_input() {
        let handler = LoginHandler::new(Arc::new(MockIdentityProvider::new()));

        let result = handler
            .handle(LoginCommand {
                display_name: "  ".to_string(),
                contact_info: "tg:@bob".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidInput(_))));
    }
}
