//! Image generator port.
//!
//! Maps a wish description to an illustration. Only called at wish creation;
//! callers are expected to bound it with a timeout and fall back on error.

use async_trait::async_trait;

use crate::domain::wish::{ImageGenerationError, ImageRef};

/// Generates an illustration for a description.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// # Errors
    ///
    /// - `UpstreamUnavailable` when the provider is unreachable or not configured
    /// - `InvalidResponse` when the provider answered without an image
    async fn generate(&self, description: &str) -> Result<ImageRef, ImageGenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_generator_is_object_safe() {
        fn _accepts_dyn(_generator: &dyn ImageGenerator) {}
    }
}
