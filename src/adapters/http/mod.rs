//! HTTP adapters - REST API implementations.
//!
//! Each area has its own dto/handlers/routes; `app` stitches them together
//! behind the auth middleware.

pub mod app;
pub mod auth;
pub mod error;
pub mod middleware;
pub mod wish;

pub use app::{api_router, with_http_layers, ApiDependencies};
pub use auth::{auth_router, AuthAppState};
pub use error::ErrorResponse;
pub use wish::{wish_router, WishAppState};
