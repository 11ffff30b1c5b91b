//! HTTP handlers for wish and exchange endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{exchange_error_response, wish_error_response, ErrorResponse};
use crate::adapters::http::middleware::{OptionalAuth, RequireAuth};
use crate::application::handlers::exchange::{
    AttemptExchangeCommand, AttemptExchangeHandler, OpenExchangeHandler, OpenExchangeQuery,
};
use crate::application::handlers::wish::{
    CreateWishCommand, CreateWishHandler, GetWishHandler, GetWishQuery, ListWishesHandler,
    ListWishesQuery, DEFAULT_IMAGE_TIMEOUT,
};
use crate::domain::foundation::{CommandMetadata, WishId};
use crate::ports::{ContactResolver, EventPublisher, ImageGenerator, WishRepository};

use super::dto::{
    CreateWishRequest, CreatedWishResponse, ExchangeRequest, ExchangeResponse,
    ExchangeViewResponse, WishListItemResponse, WishResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WishAppState {
    pub repository: Arc<dyn WishRepository>,
    pub image_generator: Arc<dyn ImageGenerator>,
    pub contact_resolver: Arc<dyn ContactResolver>,
    pub event_publisher: Arc<dyn EventPublisher>,
    pub image_timeout: Duration,
}

impl WishAppState {
    pub fn new(
        repository: Arc<dyn WishRepository>,
        image_generator: Arc<dyn ImageGenerator>,
        contact_resolver: Arc<dyn ContactResolver>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            image_generator,
            contact_resolver,
            event_publisher,
            image_timeout: DEFAULT_IMAGE_TIMEOUT,
        }
    }

    pub fn with_image_timeout(mut self, timeout: Duration) -> Self {
        self.image_timeout = timeout;
        self
    }

    pub fn create_wish_handler(&self) -> CreateWishHandler {
        CreateWishHandler::new(
            self.repository.clone(),
            self.image_generator.clone(),
            self.event_publisher.clone(),
        )
        .with_image_timeout(self.image_timeout)
    }

    pub fn get_wish_handler(&self) -> GetWishHandler {
        GetWishHandler::new(self.repository.clone())
    }

    pub fn list_wishes_handler(&self) -> ListWishesHandler {
        ListWishesHandler::new(self.repository.clone())
    }

    pub fn attempt_exchange_handler(&self) -> AttemptExchangeHandler {
        AttemptExchangeHandler::new(
            self.repository.clone(),
            self.contact_resolver.clone(),
            self.event_publisher.clone(),
        )
    }

    pub fn open_exchange_handler(&self) -> OpenExchangeHandler {
        OpenExchangeHandler::new(self.repository.clone(), self.contact_resolver.clone())
    }
}

fn parse_wish_id(raw: &str) -> Result<WishId, Response> {
    raw.parse::<WishId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid wish ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Wish handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/wishes - All wishes, newest first, with the caller's state on each
pub async fn list_wishes(
    State(state): State<WishAppState>,
    OptionalAuth(viewer): OptionalAuth,
) -> Response {
    let query = ListWishesQuery {
        viewer: viewer.map(|u| u.id().clone()),
    };

    match state.list_wishes_handler().handle(query).await {
        Ok(listings) => {
            let body: Vec<WishListItemResponse> =
                listings.into_iter().map(WishListItemResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => wish_error_response(e),
    }
}

/// POST /api/wishes - Publish a wish (image generated or placeholder)
pub async fn create_wish(
    State(state): State<WishAppState>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateWishRequest>,
) -> Response {
    let metadata = CommandMetadata::new(user.id().clone()).with_source("http");
    let cmd = CreateWishCommand {
        owner: user,
        description: req.description,
    };

    match state.create_wish_handler().handle(cmd, metadata).await {
        Ok(result) => {
            (StatusCode::CREATED, Json(CreatedWishResponse::from(result))).into_response()
        }
        Err(e) => wish_error_response(e),
    }
}

/// GET /api/wishes/:id - Single wish
pub async fn get_wish(State(state): State<WishAppState>, Path(wish_id): Path<String>) -> Response {
    let wish_id = match parse_wish_id(&wish_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_wish_handler().handle(GetWishQuery { wish_id }).await {
        Ok(wish) => (StatusCode::OK, Json(WishResponse::from(&wish))).into_response(),
        Err(e) => wish_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Exchange handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/wishes/:id/exchange - What the caller sees for this wish's exchange
pub async fn open_exchange(
    State(state): State<WishAppState>,
    RequireAuth(user): RequireAuth,
    Path(wish_id): Path<String>,
) -> Response {
    let wish_id = match parse_wish_id(&wish_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = OpenExchangeQuery {
        viewer: user.id().clone(),
        wish_id,
    };

    match state.open_exchange_handler().handle(query).await {
        Ok(view) => (StatusCode::OK, Json(ExchangeViewResponse::from(view))).into_response(),
        Err(e) => exchange_error_response(e),
    }
}

/// POST /api/wishes/:id/exchange - Submit a reciprocal wish, reveal the owner's contact
pub async fn attempt_exchange(
    State(state): State<WishAppState>,
    RequireAuth(user): RequireAuth,
    Path(wish_id): Path<String>,
    Json(req): Json<ExchangeRequest>,
) -> Response {
    let wish_id = match parse_wish_id(&wish_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let metadata = CommandMetadata::new(user.id().clone()).with_source("http");
    let cmd = AttemptExchangeCommand {
        viewer: user,
        wish_id,
        reciprocal_description: req.description,
    };

    match state.attempt_exchange_handler().handle(cmd, metadata).await {
        Ok(outcome) => (StatusCode::OK, Json(ExchangeResponse::from(outcome))).into_response(),
        Err(e) => exchange_error_response(e),
    }
}
