//! Top-level router assembly.
//!
//! `api_router` wires the endpoint groups and the auth middleware;
//! `with_http_layers` adds tracing, CORS and the request timeout from
//! server configuration.

use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use http::{HeaderValue, Method};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::ports::{IdentityProvider, SessionValidator};

use super::auth::{auth_router, AuthAppState};
use super::middleware::auth_middleware;
use super::wish::{wish_router, WishAppState};

/// Everything the HTTP surface needs.
#[derive(Clone)]
pub struct ApiDependencies {
    pub identity: Arc<dyn IdentityProvider>,
    pub session_validator: Arc<dyn SessionValidator>,
    pub wishes: WishAppState,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the API router with bearer-token auth applied to every route.
pub fn api_router(deps: ApiDependencies) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(auth_router().with_state(AuthAppState::new(deps.identity)))
        .merge(wish_router().with_state(deps.wishes))
        .layer(middleware::from_fn_with_state(
            deps.session_validator,
            auth_middleware,
        ))
}

/// Adds request tracing, CORS and the request timeout.
pub fn with_http_layers(router: Router, config: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
