//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `events` - In-process event bus
//! - `http` - axum REST API
//! - `image` - Gemini image generation (plus a mock)
//! - `memory` - In-memory wish store and identity provider, demo seed data
//! - `postgres` - PostgreSQL wish store

pub mod events;
pub mod http;
pub mod image;
pub mod memory;
pub mod postgres;

pub use events::InMemoryEventBus;
pub use image::{GeminiConfig, GeminiImageGenerator, MockImageGenerator};
pub use memory::{seed_demo_data, InMemoryIdentityProvider, InMemoryWishRepository};
pub use postgres::PostgresWishRepository;
