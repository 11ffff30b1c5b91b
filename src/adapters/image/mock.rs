//! Mock image generator for testing and offline runs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;

use crate::domain::wish::{ImageGenerationError, ImageRef};
use crate::ports::ImageGenerator;

/// Mock image generator.
///
/// Returns a fixed image reference unless configured to fail or stall.
#[derive(Debug)]
pub struct MockImageGenerator {
    image: ImageRef,
    delay: Option<Duration>,
    force_error: RwLock<Option<ImageGenerationError>>,
    calls: AtomicUsize,
}

impl MockImageGenerator {
    pub fn new() -> Self {
        Self {
            image: ImageRef::new("https://images.example.com/generated.png"),
            delay: None,
            force_error: RwLock::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = image;
        self
    }

    /// Sleeps before answering, for timeout tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_error(self, error: ImageGenerationError) -> Self {
        *self.force_error.write().unwrap_or_else(|e| e.into_inner()) = Some(error);
        self
    }

    /// Number of `generate` calls made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate(&self, _description: &str) -> Result<ImageRef, ImageGenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(error);
        }
        Ok(self.image.clone())
    }
}
