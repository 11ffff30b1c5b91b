//! CreateWishHandler - Command handler for posting a new wish.
//!
//! The image is resolved before the wish is stored. Generation is bounded by
//! a timeout and every failure falls back to a deterministic placeholder, so
//! a slow or broken generator never blocks wish creation.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent};
use crate::domain::user::User;
use crate::domain::wish::{
    validate_description, ImageGenerationError, ImageOutcome, Wish, WishCreated, WishError,
};
use crate::ports::{EventPublisher, ImageGenerator, WishRepository};

/// Default bound on a single image generation call.
pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Command to create a new wish.
#[derive(Debug, Clone)]
pub struct CreateWishCommand {
    pub owner: User,
    pub description: String,
}

/// Result of successful wish creation.
#[derive(Debug, Clone)]
pub struct CreateWishResult {
    pub wish: Wish,
    pub image: ImageOutcome,
    pub event: WishCreated,
}

/// Handler for creating wishes.
pub struct CreateWishHandler {
    repository: Arc<dyn WishRepository>,
    image_generator: Arc<dyn ImageGenerator>,
    event_publisher: Arc<dyn EventPublisher>,
    image_timeout: Duration,
}

impl CreateWishHandler {
    pub fn new(
        repository: Arc<dyn WishRepository>,
        image_generator: Arc<dyn ImageGenerator>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            image_generator,
            event_publisher,
            image_timeout: DEFAULT_IMAGE_TIMEOUT,
        }
    }

    pub fn with_image_timeout(mut self, timeout: Duration) -> Self {
        self.image_timeout = timeout;
        self
    }

    pub async fn handle(
        &self,
        cmd: CreateWishCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateWishResult, WishError> {
        // 1. Validate before spending an upstream call
        let description = validate_description("description", &cmd.description)?;

        // 2. Resolve the image (never fails)
        let image = self.resolve_image(&description).await;
        if let ImageOutcome::Fallback { reason, .. } = &image {
            tracing::warn!(
                owner_id = %cmd.owner.id(),
                reason = %reason,
                "Image generation failed, using placeholder"
            );
        }

        // 3. Create and persist
        let wish = Wish::create(&cmd.owner, &description, image.image_ref().clone())?;
        self.repository.save(&wish).await?;

        // 4. Publish
        let event = WishCreated {
            event_id: EventId::new(),
            wish_id: *wish.id(),
            owner_id: wish.owner_id().clone(),
            image_fallback: image.is_fallback(),
            created_at: *wish.created_at(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());

        self.event_publisher.publish(envelope).await?;

        tracing::info!(
            wish_id = %wish.id(),
            owner_id = %wish.owner_id(),
            image_fallback = image.is_fallback(),
            "Wish created"
        );

        Ok(CreateWishResult { wish, image, event })
    }

    async fn resolve_image(&self, description: &str) -> ImageOutcome {
        let result = match tokio::time::timeout(
            self.image_timeout,
            self.image_generator.generate(description),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(ImageGenerationError::TimedOut {
                timeout_secs: self.image_timeout.as_secs(),
            }),
        };
        ImageOutcome::from_result(description, result)
    }
}
