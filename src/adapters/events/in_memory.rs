//! In-memory event bus.
//!
//! Keeps every published envelope in process and logs it. Used as the
//! default publisher when no external bus is configured, and as the capture
//! point for event assertions in tests.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus.
///
/// Features:
/// - Event capture for assertions
/// - Structured log line per event
/// - Forced failure for error-path tests
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
/// assert!(bus.has_event("wish.created.v1"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
    force_error: RwLock<Option<String>>,
}

impl InMemoryEventBus {
    /// Creates a new empty event bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent publish fail with the given message.
    pub fn with_error(self, message: impl Into<String>) -> Self {
        *self.force_error.write().unwrap_or_else(|e| e.into_inner()) = Some(message.into());
        self
    }

    // === Test Helpers ===

    /// Returns all published events.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Returns count of published events.
    pub fn event_count(&self) -> usize {
        self.published.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if let Some(message) = self
            .force_error
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(DomainError::new(ErrorCode::InternalError, message));
        }

        tracing::info!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            correlation_id = ?event.metadata.correlation_id,
            "Domain event published"
        );

        self.published
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{EventId, EventMetadata, Timestamp};
    use serde_json::json;

    fn test_envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope {
            event_id: EventId::new(),
            event_type: event_type.to_string(),
            schema_version: 1,
            aggregate_id: aggregate_id.to_string(),
            aggregate_type: "Wish".to_string(),
            occurred_at: Timestamp::now(),
            payload: json!({}),
            metadata: EventMetadata::default(),
        }
    }

    #[tokio::test]
    async fn publish_stores_event() {
        let bus = InMemoryEventBus::new();

        bus.publish(test_envelope("wish.created.v1", "w-1")).await.unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event("wish.created.v1"));
        assert!(!bus.has_event("wish.exchanged.v1"));
    }

    #[tokio::test]
    async fn filters_by_type_and_aggregate() {
        let bus = InMemoryEventBus::new();

        bus.publish_all(vec![
            test_envelope("wish.created.v1", "w-1"),
            test_envelope("wish.exchanged.v1", "w-1"),
            test_envelope("wish.created.v1", "w-2"),
        ])
        .await
        .unwrap();

        assert_eq!(bus.events_of_type("wish.created.v1").len(), 2);
        assert_eq!(bus.events_for_aggregate("w-1").len(), 2);
    }

    #[tokio::test]
    async fn forced_error_is_returned_and_nothing_stored() {
        let bus = InMemoryEventBus::new().with_error("bus offline");

        let result = bus.publish(test_envelope("wish.created.v1", "w-1")).await;

        assert_eq!(result.unwrap_err().code, ErrorCode::InternalError);
        assert_eq!(bus.event_count(), 0);
    }
}
