//! Error body and status mapping shared by all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::exchange::ExchangeError;
use crate::domain::foundation::AuthError;
use crate::domain::wish::WishError;

/// JSON error body: `{ "code": ..., "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "Something went wrong, please try again")
    }
}

fn respond(status: StatusCode, body: ErrorResponse) -> Response {
    (status, Json(body)).into_response()
}

/// Maps wish errors to responses. Infrastructure details are logged, not returned.
pub fn wish_error_response(error: WishError) -> Response {
    match &error {
        WishError::NotFound(_) => respond(
            StatusCode::NOT_FOUND,
            ErrorResponse::new(error.code().to_string(), error.message()),
        ),
        WishError::ValidationFailed { .. } => respond(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error.code().to_string(), error.message()),
        ),
        WishError::SelfExchange => respond(
            StatusCode::CONFLICT,
            ErrorResponse::new(error.code().to_string(), error.message()),
        ),
        WishError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Wish request failed");
            respond(StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal())
        }
    }
}

/// Maps exchange errors to responses.
pub fn exchange_error_response(error: ExchangeError) -> Response {
    let status = match &error {
        ExchangeError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        ExchangeError::NotFound(_) => StatusCode::NOT_FOUND,
        ExchangeError::SelfExchange => StatusCode::CONFLICT,
        ExchangeError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Exchange request failed");
            return respond(StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal());
        }
    };
    respond(
        status,
        ErrorResponse::new(error.code().to_string(), error.message()),
    )
}

/// Maps identity errors to responses.
pub fn auth_error_response(error: AuthError) -> Response {
    match error {
        AuthError::InvalidInput(msg) => respond(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("VALIDATION_FAILED", msg),
        ),
        AuthError::InvalidToken => respond(
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new("UNAUTHORIZED", "Invalid or expired session"),
        ),
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!(error = %msg, "Identity service unavailable");
            respond(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new("SERVICE_UNAVAILABLE", "Identity service unavailable"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::WishId;

    #[test]
    fn wish_not_found_maps_to_404() {
        let response = wish_error_response(WishError::not_found(WishId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn wish_validation_maps_to_400() {
        let response = wish_error_response(WishError::validation("description", "empty"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn wish_infrastructure_maps_to_500() {
        let response = wish_error_response(WishError::infrastructure("db down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn exchange_errors_map_to_statuses() {
        assert_eq!(
            exchange_error_response(ExchangeError::invalid_input("reciprocal_description", "empty"))
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            exchange_error_response(ExchangeError::NotFound(WishId::new())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            exchange_error_response(ExchangeError::SelfExchange).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            exchange_error_response(ExchangeError::infrastructure("bus down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn auth_errors_map_to_statuses() {
        assert_eq!(
            auth_error_response(AuthError::InvalidInput("blank".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            auth_error_response(AuthError::InvalidToken).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn error_response_serializes_code_and_message() {
        let json = serde_json::to_value(ErrorResponse::bad_request("nope")).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["message"], "nope");
    }
}
