//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event plumbing and error types
//! that form the vocabulary of the wish exchange domain.

mod auth;
mod command;
mod errors;
mod events;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, SessionToken};
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{UserId, WishId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
