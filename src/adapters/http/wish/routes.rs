//! Route configuration for wish endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    attempt_exchange, create_wish, get_wish, list_wishes, open_exchange, WishAppState,
};

/// Creates the wish router.
///
/// Routes:
/// - `GET /api/wishes` - List wishes, newest first
/// - `POST /api/wishes` - Create a wish
/// - `GET /api/wishes/:id` - Get one wish
/// - `GET /api/wishes/:id/exchange` - Open the exchange view
/// - `POST /api/wishes/:id/exchange` - Exchange a reciprocal wish for the owner's contact
pub fn wish_router() -> Router<WishAppState> {
    Router::new()
        .route("/api/wishes", get(list_wishes).post(create_wish))
        .route("/api/wishes/:id", get(get_wish))
        .route(
            "/api/wishes/:id/exchange",
            get(open_exchange).post(attempt_exchange),
        )
}
