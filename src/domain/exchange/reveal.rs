//! Contact disclosure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::UserId;

/// Shown when the owner's contact cannot be resolved.
pub const PLACEHOLDER_CONTACT: &str = "Email: dreamer@wishshop.demo";

/// Where a revealed contact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactSource {
    Owner,
    Placeholder,
}

/// Contact information disclosed to a viewer after an exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedContact {
    pub contact: String,
    pub source: ContactSource,
}

impl RevealedContact {
    pub fn from_owner(contact: impl Into<String>) -> Self {
        Self {
            contact: contact.into(),
            source: ContactSource::Owner,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            contact: PLACEHOLDER_CONTACT.to_string(),
            source: ContactSource::Placeholder,
        }
    }

    /// Maps a resolver result, substituting the placeholder when unresolved.
    pub fn from_resolution(result: Result<String, ContactUnresolved>) -> Self {
        match result {
            Ok(contact) => Self::from_owner(contact),
            Err(_) => Self::placeholder(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.source == ContactSource::Placeholder
    }
}

/// The contact resolver has no contact for this user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No contact information for user {user_id}")]
pub struct ContactUnresolved {
    pub user_id: UserId,
}

impl ContactUnresolved {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
