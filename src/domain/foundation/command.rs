//! Command infrastructure for application handlers.
//!
//! Instead of each handler accepting loose `correlation_id` / `user_id`
//! arguments, they accept a single `CommandMetadata` that is propagated to
//! emitted events and log spans.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Metadata context for command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The user executing this command.
    pub user_id: UserId,

    /// Links related operations across a single user request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "http", "seed").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata with required user ID.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: None,
            source: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain_sets_fields() {
        let metadata = CommandMetadata::new(UserId::new("user-456").unwrap())
            .with_correlation_id("corr-123")
            .with_source("http");

        assert_eq!(metadata.correlation_id(), "corr-123");
        assert_eq!(metadata.source(), Some("http"));
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new(UserId::new("user").unwrap());
        assert!(!metadata.correlation_id().is_empty());
        assert!(metadata.source().is_none());
    }
}
