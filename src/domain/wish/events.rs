//! Wish domain events.
//!
//! - `WishCreated` - A wish was posted
//! - `WishExchanged` - A viewer completed an exchange for the first time

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, Timestamp, UserId, WishId};

// ════════════════════════════════════════════════════════════════════════════
// WishCreated
// ════════════════════════════════════════════════════════════════════════════

/// Published when a new wish is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishCreated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the created wish.
    pub wish_id: WishId,

    /// User who posted the wish.
    pub owner_id: UserId,

    /// True when the image is the placeholder rather than a generated one.
    pub image_fallback: bool,

    /// When the wish was created.
    pub created_at: Timestamp,
}

domain_event!(
    WishCreated,
    event_type = "wish.created.v1",
    aggregate_id = wish_id,
    aggregate_type = "Wish",
    occurred_at = created_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// WishExchanged
// ════════════════════════════════════════════════════════════════════════════

/// Published once per (wish, viewer) pair, when the viewer is first added.
///
/// The reciprocal description is intentionally absent: it is never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishExchanged {
    pub event_id: EventId,
    pub wish_id: WishId,
    pub owner_id: UserId,
    pub viewer_id: UserId,
    pub exchanged_at: Timestamp,
}

domain_event!(
    WishExchanged,
    event_type = "wish.exchanged.v1",
    aggregate_id = wish_id,
    aggregate_type = "Wish",
    occurred_at = exchanged_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    #[test]
    fn wish_created_envelope_is_versioned() {
        let wish_id = WishId::new();
        let event = WishCreated {
            event_id: EventId::new(),
            wish_id,
            owner_id: UserId::new("alice").unwrap(),
            image_fallback: true,
            created_at: Timestamp::now(),
        };

        let envelope = event.to_envelope();
        assert_eq!(envelope.event_type, "wish.created.v1");
        assert_eq!(envelope.schema_version, 1);
        assert_eq!(envelope.aggregate_id, wish_id.to_string());
        assert_eq!(envelope.payload["image_fallback"], true);
    }

    #[test]
    fn wish_exchanged_carries_both_parties() {
        let event = WishExchanged {
            event_id: EventId::new(),
            wish_id: WishId::new(),
            owner_id: UserId::new("alice").unwrap(),
            viewer_id: UserId::new("bob").unwrap(),
            exchanged_at: Timestamp::now(),
        };

        assert_eq!(event.aggregate_type(), "Wish");
        let restored: WishExchanged = event.to_envelope().payload_as().unwrap();
        assert_eq!(restored.viewer_id.as_str(), "bob");
        assert_eq!(restored.owner_id.as_str(), "alice");
    }
}
