//! User record produced by the identity provider.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};

/// Maximum length for display names.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 100;

/// Maximum length for contact information.
pub const MAX_CONTACT_INFO_LENGTH: usize = 200;

/// A wisher.
///
/// # Invariants
///
/// - `display_name` and `contact_info` are non-empty after trimming
/// - immutable once created
///
/// `contact_info` is sensitive and only leaves the system through a
/// completed exchange, so `User` deliberately does not implement `Serialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    display_name: String,
    contact_info: String,
}

impl User {
    /// Creates a user with a freshly generated id.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if either field is blank
    /// - `TooLong` if either field exceeds its maximum length
    pub fn register(display_name: &str, contact_info: &str) -> Result<Self, ValidationError> {
        Self::with_id(UserId::generate(), display_name, contact_info)
    }

    /// Creates a user with a known id (seed data, external identities).
    pub fn with_id(
        id: UserId,
        display_name: &str,
        contact_info: &str,
    ) -> Result<Self, ValidationError> {
        let display_name = Self::validate_field("display_name", display_name, MAX_DISPLAY_NAME_LENGTH)?;
        let contact_info = Self::validate_field("contact_info", contact_info, MAX_CONTACT_INFO_LENGTH)?;
        Ok(Self {
            id,
            display_name,
            contact_info,
        })
    }

    fn validate_field(field: &str, value: &str, max: usize) -> Result<String, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        let len = trimmed.chars().count();
        if len > max {
            return Err(ValidationError::too_long(field, max, len));
        }
        Ok(trimmed.to_string())
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Contact details; only hand these out through an exchange.
    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }
}

/// Public view of a user (no contact information).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub id: UserId,
    pub display_name: String,
}

impl From<&User> for PublicProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            display_name: user.display_name.clone(),
        }
    }
}
