//! Image generator adapters.
//!
//! - `GeminiImageGenerator` - Gemini `generateContent` over HTTPS
//! - `MockImageGenerator` - Fixed image, forced errors and delays for tests

mod gemini;
mod mock;

pub use gemini::{GeminiConfig, GeminiImageGenerator};
pub use mock::MockImageGenerator;
