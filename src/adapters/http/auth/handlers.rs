//! HTTP handlers for login/logout.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::auth_error_response;
use crate::adapters::http::middleware::{CurrentSession, RequireAuth};
use crate::application::handlers::identity::{
    LoginCommand, LoginHandler, LogoutCommand, LogoutHandler,
};
use crate::domain::foundation::CommandMetadata;
use crate::ports::IdentityProvider;

use super::dto::{LoginRequest, LoginResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthAppState {
    pub identity: Arc<dyn IdentityProvider>,
}

impl AuthAppState {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.identity.clone())
    }

    pub fn logout_handler(&self) -> LogoutHandler {
        LogoutHandler::new(self.identity.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/auth/login - Create a user and open a session
pub async fn login(
    State(state): State<AuthAppState>,
    Json(req): Json<LoginRequest>,
) -> Response {
    let cmd = LoginCommand {
        display_name: req.display_name,
        contact_info: req.contact_info,
    };

    match state.login_handler().handle(cmd).await {
        Ok(result) => (StatusCode::CREATED, Json(LoginResponse::from(result))).into_response(),
        Err(e) => auth_error_response(e),
    }
}

/// POST /api/auth/logout - Discard the caller's session
pub async fn logout(
    State(state): State<AuthAppState>,
    RequireAuth(user): RequireAuth,
    CurrentSession(token): CurrentSession,
) -> Response {
    let metadata = CommandMetadata::new(user.id().clone()).with_source("http");

    match state
        .logout_handler()
        .handle(LogoutCommand { token }, metadata)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => auth_error_response(e),
    }
}
