//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence
//!
//! - `WishRepository` - Wish storage and exchange recording
//!
//! ## Identity
//!
//! - `IdentityProvider` - Login and logout
//! - `SessionValidator` - Bearer token to `User`
//! - `ContactResolver` - Contact lookup for revealed exchanges
//!
//! ## External services
//!
//! - `ImageGenerator` - Description to illustration
//! - `EventPublisher` - Domain event publishing

mod contact_resolver;
mod event_publisher;
mod identity_provider;
mod image_generator;
mod session_validator;
mod wish_repository;

pub use contact_resolver::ContactResolver;
pub use event_publisher::EventPublisher;
pub use identity_provider::{IdentityProvider, LoginResult};
pub use image_generator::ImageGenerator;
pub use session_validator::SessionValidator;
pub use wish_repository::{wish_not_found, ExchangeRecord, WishRepository};
