//! AttemptExchangeHandler - Command handler for the wish exchange.
//!
//! A viewer submits a reciprocal wish text against someone else's wish. On
//! success the viewer is recorded in the wish's `exchanged_with` set and the
//! owner's contact is revealed. Re-submitting is idempotent: no second write,
//! no second event, same contact.
//!
//! The reciprocal text is validated and then discarded; only its length is
//! logged.

use std::sync::Arc;

use crate::domain::exchange::{ExchangeError, ExchangeOutcome, ExchangeState, RevealedContact};
use crate::domain::foundation::{
    CommandMetadata, EventId, SerializableDomainEvent, Timestamp, UserId, WishId,
};
use crate::domain::user::User;
use crate::domain::wish::{validate_description, WishExchanged};
use crate::ports::{ContactResolver, EventPublisher, WishRepository};

/// Command to exchange with a wish.
#[derive(Debug, Clone)]
pub struct AttemptExchangeCommand {
    pub viewer: User,
    pub wish_id: WishId,
    pub reciprocal_description: String,
}

/// Handler for exchange attempts.
pub struct AttemptExchangeHandler {
    repository: Arc<dyn WishRepository>,
    contact_resolver: Arc<dyn ContactResolver>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl AttemptExchangeHandler {
    pub fn new(
        repository: Arc<dyn WishRepository>,
        contact_resolver: Arc<dyn ContactResolver>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            contact_resolver,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: AttemptExchangeCommand,
        metadata: CommandMetadata,
    ) -> Result<ExchangeOutcome, ExchangeError> {
        let viewer_id = cmd.viewer.id();

        // 1. Load and check state
        let wish = self
            .repository
            .find_by_id(&cmd.wish_id)
            .await?
            .ok_or(ExchangeError::NotFound(cmd.wish_id))?;

        let mut reciprocal_len = 0;
        let mut event_published = false;
        let (wish, newly_unlocked) = match ExchangeState::for_viewer(&wish, viewer_id) {
            ExchangeState::Owner => return Err(ExchangeError::SelfExchange),
            // Re-entry skips the submission step entirely
            ExchangeState::Unlocked => (wish, false),
            ExchangeState::Locked => {
                // 2. Reciprocal text must be present; nothing is touched otherwise
                let reciprocal =
                    validate_description("reciprocal_description", &cmd.reciprocal_description)?;
                reciprocal_len = reciprocal.chars().count();

                // 3. Record (atomic and idempotent in the store)
                let record = self
                    .repository
                    .record_exchange(&cmd.wish_id, viewer_id)
                    .await?;
                if record.newly_added {
                    // The write is durable at this point, so a publish failure
                    // must not fail the exchange
                    match self
                        .publish_exchanged(record.wish.owner_id(), &cmd.wish_id, viewer_id, &metadata)
                        .await
                    {
                        Ok(()) => event_published = true,
                        Err(err) => tracing::error!(
                            wish_id = %cmd.wish_id,
                            viewer_id = %viewer_id,
                            error = %err,
                            "Failed to publish wish.exchanged event"
                        ),
                    }
                }
                (record.wish, record.newly_added)
            }
        };

        // 4. Reveal
        let contact = self.reveal_contact(wish.owner_id()).await;

        tracing::info!(
            wish_id = %wish.id(),
            viewer_id = %viewer_id,
            newly_unlocked,
            event_published,
            reciprocal_len,
            contact_source = ?contact.source,
            "Exchange completed"
        );

        Ok(ExchangeOutcome {
            wish,
            contact,
            newly_unlocked,
            event_published,
        })
    }

    async fn reveal_contact(&self, owner_id: &UserId) -> RevealedContact {
        let resolution = self.contact_resolver.resolve_contact(owner_id).await;
        if let Err(err) = &resolution {
            tracing::warn!(
                owner_id = %owner_id,
                error = %err,
                "Owner contact unresolved, using placeholder"
            );
        }
        RevealedContact::from_resolution(resolution)
    }

    async fn publish_exchanged(
        &self,
        owner_id: &UserId,
        wish_id: &WishId,
        viewer_id: &UserId,
        metadata: &CommandMetadata,
    ) -> Result<(), ExchangeError> {
        let event = WishExchanged {
            event_id: EventId::new(),
            wish_id: *wish_id,
            owner_id: owner_id.clone(),
            viewer_id: viewer_id.clone(),
            exchanged_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;
        Ok(())
    }
}
