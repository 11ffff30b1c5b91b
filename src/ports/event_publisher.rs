//! EventPublisher port - Interface for publishing domain events.
//!
//! This port defines how handlers publish events without knowing about the
//! underlying transport.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Errors are propagated to the caller
/// - `publish_all` delivers events in order
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events in order.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_publisher_is_object_safe() {
        fn _accepts_dyn(_publisher: &dyn EventPublisher) {}
    }
}
