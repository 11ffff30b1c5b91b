//! Wish-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError, WishId};

/// Wish-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WishError {
    /// Wish was not found.
    NotFound(WishId),
    /// The owner tried to exchange with their own wish.
    SelfExchange,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl WishError {
    pub fn not_found(id: WishId) -> Self {
        WishError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        WishError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        WishError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            WishError::NotFound(_) => ErrorCode::WishNotFound,
            WishError::SelfExchange => ErrorCode::SelfExchange,
            WishError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            WishError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            WishError::NotFound(id) => format!("Wish not found: {}", id),
            WishError::SelfExchange => "Cannot exchange with your own wish".to_string(),
            WishError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            WishError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for WishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for WishError {}

impl From<ValidationError> for WishError {
    fn from(err: ValidationError) -> Self {
        WishError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for WishError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::WishNotFound => match err.details.get("wish_id").map(|s| s.parse()) {
                Some(Ok(id)) => WishError::NotFound(id),
                _ => WishError::Infrastructure(err.to_string()),
            },
            ErrorCode::SelfExchange => WishError::SelfExchange,
            ErrorCode::ValidationFailed => WishError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => WishError::Infrastructure(err.to_string()),
        }
    }
}
