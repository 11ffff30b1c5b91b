//! Exchange-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError, WishId};
use crate::domain::wish::WishError;

/// Errors returned by exchange operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// Reciprocal description was blank or too long. Nothing was written.
    InvalidInput { field: String, message: String },
    /// Wish does not exist.
    NotFound(WishId),
    /// Viewer owns the wish.
    SelfExchange,
    /// Repository or event bus failure.
    Infrastructure(String),
}

impl ExchangeError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        ExchangeError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ExchangeError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ExchangeError::InvalidInput { .. } => ErrorCode::ValidationFailed,
            ExchangeError::NotFound(_) => ErrorCode::WishNotFound,
            ExchangeError::SelfExchange => ErrorCode::SelfExchange,
            ExchangeError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ExchangeError::InvalidInput { field, message } => {
                format!("Invalid '{}': {}", field, message)
            }
            ExchangeError::NotFound(id) => format!("Wish not found: {}", id),
            ExchangeError::SelfExchange => "Cannot exchange with your own wish".to_string(),
            ExchangeError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ExchangeError {}

impl From<ValidationError> for ExchangeError {
    fn from(err: ValidationError) -> Self {
        ExchangeError::invalid_input(err.field().to_string(), err.to_string())
    }
}

impl From<WishError> for ExchangeError {
    fn from(err: WishError) -> Self {
        match err {
            WishError::NotFound(id) => ExchangeError::NotFound(id),
            WishError::SelfExchange => ExchangeError::SelfExchange,
            WishError::ValidationFailed { field, message } => {
                ExchangeError::InvalidInput { field, message }
            }
            WishError::Infrastructure(msg) => ExchangeError::Infrastructure(msg),
        }
    }
}

impl From<DomainError> for ExchangeError {
    fn from(err: DomainError) -> Self {
        ExchangeError::from(WishError::from(err))
    }
}
