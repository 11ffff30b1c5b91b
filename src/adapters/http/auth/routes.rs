//! Route configuration for login/logout.

use axum::routing::post;
use axum::Router;

use super::handlers::{login, logout, AuthAppState};

/// Routes:
/// - `POST /api/auth/login` - Log in with display name and contact
/// - `POST /api/auth/logout` - End the current session
pub fn auth_router() -> Router<AuthAppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
}
