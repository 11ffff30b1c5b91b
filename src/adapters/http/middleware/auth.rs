//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates Bearer tokens and injects the user into extensions
//! - `RequireAuth` - Extractor that requires a logged-in user
//! - `OptionalAuth` - Extractor for browse endpoints that also serve anonymous viewers
//!
//! ```text
//! Request → auth_middleware → injects User + SessionToken into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! The middleware only talks to the `SessionValidator` port, so the
//! in-memory identity store and any future provider look the same here.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, SessionToken};
use crate::domain::user::User;
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Authentication middleware that validates Bearer tokens.
///
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the `SessionValidator` port
/// 3. On success, injects `User` and `SessionToken` into request extensions
/// 4. On missing token, continues without injecting (anonymous browsing)
/// 5. On invalid token, returns 401 Unauthorized
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string());

    let Some(token) = token else {
        return next.run(request).await;
    };

    match validator.validate(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            request
                .extensions_mut()
                .insert(SessionToken::from_string(token));
            next.run(request).await
        }
        Err(AuthError::ServiceUnavailable(msg)) => {
            tracing::error!(error = %msg, "Identity service unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(
                    "SERVICE_UNAVAILABLE",
                    "Authentication service unavailable",
                )),
            )
                .into_response()
        }
        Err(_) => AuthRejection::InvalidSession.into_response(),
    }
}

/// Extractor that requires authentication.
///
/// Returns 401 when the middleware did not attach a user.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<User>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Extractor for optional authentication.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<User>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuth(parts.extensions.get::<User>().cloned()))
    }
}

/// Extractor for the caller's session token (logout).
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionToken);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionToken>()
            .cloned()
            .map(CurrentSession)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    /// No token was provided.
    Unauthenticated,
    /// A token was provided but is unknown or logged out.
    InvalidSession,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = match self {
            AuthRejection::Unauthenticated => {
                ErrorResponse::new("UNAUTHENTICATED", "Please log in first")
            }
            AuthRejection::InvalidSession => {
                ErrorResponse::new("UNAUTHORIZED", "Invalid or expired session")
            }
        };
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryIdentityProvider;
    use crate::ports::IdentityProvider;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::routing::get;
    use axum::{middleware, Router};
    use tower::ServiceExt;

    fn test_user() -> User {
        User::register("Alice", "wx:alice").unwrap()
    }

    async fn whoami(RequireAuth(user): RequireAuth) -> String {
        user.display_name().to_string()
    }

    async fn maybe(OptionalAuth(user): OptionalAuth) -> String {
        user.map(|u| u.display_name().to_string())
            .unwrap_or_else(|| "anonymous".to_string())
    }

    fn app(provider: Arc<InMemoryIdentityProvider>) -> Router {
        let validator: AuthState = provider;
        Router::new()
            .route("/whoami", get(whoami))
            .route("/maybe", get(maybe))
            .layer(middleware::from_fn_with_state(validator, auth_middleware))
    }

    fn get_request(uri: &str, token: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Middleware Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn valid_token_reaches_protected_handler() {
        let provider = Arc::new(InMemoryIdentityProvider::new());
        let login = provider.login("Alice", "wx:alice").await.unwrap();

        let response = app(provider)
            .oneshot(get_request("/whoami", Some(login.token.as_str())))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Alice");
    }

    #[tokio::test]
    async fn missing_token_is_rejected_by_require_auth() {
        let provider = Arc::new(InMemoryIdentityProvider::new());

        let response = app(provider)
            .oneshot(get_request("/whoami", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_token_is_anonymous_for_optional_auth() {
        let provider = Arc::new(InMemoryIdentityProvider::new());

        let response = app(provider)
            .oneshot(get_request("/maybe", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "anonymous");
    }

    #[tokio::test]
    async fn unknown_token_returns_401() {
        let provider = Arc::new(InMemoryIdentityProvider::new());

        let response = app(provider)
            .oneshot(get_request("/maybe", Some("not-a-session")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Extractor Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn require_auth_extracts_user_from_extensions() {
        let mut request: HttpRequest<()> = HttpRequest::builder().uri("/test").body(()).unwrap();
        request.extensions_mut().insert(test_user());
        let (mut parts, _body) = request.into_parts();

        let RequireAuth(user) = RequireAuth::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.display_name(), "Alice");
    }

    #[tokio::test]
    async fn current_session_fails_without_token() {
        let request: HttpRequest<()> = HttpRequest::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result = CurrentSession::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }

    #[test]
    fn auth_rejection_returns_401() {
        assert_eq!(
            AuthRejection::Unauthenticated.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthRejection::InvalidSession.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn auth_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthState>();
    }
}
