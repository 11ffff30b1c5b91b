//! Image references and the explicit fallback outcome of image generation.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Base URL for placeholder images.
const PLACEHOLDER_BASE_URL: &str = "https://picsum.photos/seed";

/// Pixel size (square) of placeholder images.
const PLACEHOLDER_SIZE: u32 = 800;

/// Reference to a wish illustration: a URL or a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Builds an inline `data:` URI from base64 image bytes.
    pub fn inline(mime_type: &str, base64_data: &str) -> Self {
        Self(format!("data:{};base64,{}", mime_type, base64_data))
    }

    /// Placeholder image for a description.
    ///
    /// The seed is derived from a SHA-256 digest of the description, so the
    /// same wish text always falls back to the same picture.
    pub fn placeholder_for(description: &str) -> Self {
        let digest = Sha256::digest(description.as_bytes());
        let seed: String = digest
            .iter()
            .take(6)
            .map(|b| format!("{:02x}", b))
            .collect();
        Self(format!(
            "{}/{}/{}/{}",
            PLACEHOLDER_BASE_URL, seed, PLACEHOLDER_SIZE, PLACEHOLDER_SIZE
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_inline(&self) -> bool {
        self.0.starts_with("data:")
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Inline images can be megabytes; never dump them into logs.
        if self.is_inline() {
            write!(f, "<inline image, {} bytes>", self.0.len())
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Failures of the upstream image generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageGenerationError {
    /// Upstream call failed (missing key, network, quota, 5xx...).
    #[error("Image generator unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream answered but returned no usable image.
    #[error("Image generator returned no image: {0}")]
    InvalidResponse(String),

    /// The call did not finish within the configured timeout.
    #[error("Image generation timed out after {timeout_secs}s")]
    TimedOut { timeout_secs: u64 },
}

/// Result of resolving the image for a new wish.
///
/// Generation never blocks wish creation: every failure becomes an explicit
/// `Fallback` carrying the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    Generated(ImageRef),
    Fallback {
        image_ref: ImageRef,
        reason: ImageGenerationError,
    },
}

impl ImageOutcome {
    /// Converts a generator result into an outcome, substituting the
    /// placeholder for the description on any failure.
    pub fn from_result(
        description: &str,
        result: Result<ImageRef, ImageGenerationError>,
    ) -> Self {
        match result {
            Ok(image_ref) => ImageOutcome::Generated(image_ref),
            Err(reason) => ImageOutcome::Fallback {
                image_ref: ImageRef::placeholder_for(description),
                reason,
            },
        }
    }

    pub fn image_ref(&self) -> &ImageRef {
        match self {
            ImageOutcome::Generated(image_ref) => image_ref,
            ImageOutcome::Fallback { image_ref, .. } => image_ref,
        }
    }

    pub fn into_image_ref(self) -> ImageRef {
        match self {
            ImageOutcome::Generated(image_ref) => image_ref,
            ImageOutcome::Fallback { image_ref, .. } => image_ref,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ImageOutcome::Fallback { .. })
    }
}
