//! Gemini image generator.
//!
//! Calls the `generateContent` endpoint of an image-capable Gemini model and
//! turns the first inline image part into a `data:` URI.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(Some(api_key))
//!     .with_model("gemini-2.5-flash-image")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let generator = GeminiImageGenerator::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::wish::{ImageGenerationError, ImageRef};
use crate::ports::ImageGenerator;

const DEFAULT_MIME_TYPE: &str = "image/png";

/// Configuration for the Gemini generator.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; `None` disables the upstream call entirely.
    api_key: Option<Secret<String>>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: Option<Secret<String>>) -> Self {
        Self {
            api_key,
            model: "gemini-2.5-flash-image".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.trim().is_empty())
    }
}

/// Image generator backed by the Gemini API.
pub struct GeminiImageGenerator {
    config: GeminiConfig,
    client: Client,
}

impl GeminiImageGenerator {
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    async fn send_request(
        &self,
        api_key: &str,
        description: &str,
    ) -> Result<Response, ImageGenerationError> {
        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&GenerateRequest::for_description(description))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ImageGenerationError::TimedOut {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ImageGenerationError::UpstreamUnavailable(format!(
                        "Connection failed: {}",
                        e
                    ))
                } else {
                    ImageGenerationError::UpstreamUnavailable(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<ImageRef, ImageGenerationError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImageGenerationError::UpstreamUnavailable(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            ImageGenerationError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        extract_image(body)
    }
}

#[async_trait]
impl ImageGenerator for GeminiImageGenerator {
    async fn generate(&self, description: &str) -> Result<ImageRef, ImageGenerationError> {
        let api_key = self.config.api_key().ok_or_else(|| {
            ImageGenerationError::UpstreamUnavailable("API key not configured".to_string())
        })?;

        let response = self.send_request(api_key, description).await?;
        let image = self.parse_response(response).await?;

        tracing::debug!(model = %self.config.model, image = %image, "Image generated");
        Ok(image)
    }
}

fn prompt_for(description: &str) -> String {
    format!(
        "Create a dreamy, artistic, and visually stunning digital art illustration \
         representing this wish: \"{}\". Do not include text in the image. \
         High quality, detailed.",
        description
    )
}

/// Returns the first inline image in the response.
fn extract_image(response: GenerateResponse) -> Result<ImageRef, ImageGenerationError> {
    response
        .candidates
        .into_iter()
        .flat_map(|c| c.content.map(|content| content.parts).unwrap_or_default())
        .find_map(|part| part.inline_data)
        .map(|data| {
            let mime = data
                .mime_type
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());
            ImageRef::inline(&mime, &data.data)
        })
        .ok_or_else(|| ImageGenerationError::InvalidResponse("No image data found".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

impl GenerateRequest {
    fn for_description(description: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: prompt_for(description),
                }],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: "1:1".to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: Option<String>,
    data: String,
}
