//! HTTP adapter for identity endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CurrentUserResponse, LoginRequest, LoginResponse};
pub use handlers::AuthAppState;
pub use routes::auth_router;
