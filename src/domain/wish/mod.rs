//! Wish domain module.
//!
//! A wish is a short text with an illustration, posted by one user. Other
//! users exchange with it by submitting a wish of their own; the set of
//! viewers who did so is the only mutable part of the aggregate.
//!
//! # Events
//!
//! - `WishCreated` - Published when a wish is stored
//! - `WishExchanged` - Published when a viewer is newly added

mod aggregate;
mod errors;
mod events;
mod image;

pub use aggregate::{validate_description, Wish, MAX_DESCRIPTION_LENGTH};
pub use errors::WishError;
pub use events::{WishCreated, WishExchanged};
pub use image::{ImageGenerationError, ImageOutcome, ImageRef};
