//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, events, errors)
//! - `user` - Users and their public profile
//! - `wish` - Wish aggregate, image references and wish events
//! - `exchange` - Per-viewer exchange state machine and contact disclosure

pub mod exchange;
pub mod foundation;
pub mod user;
pub mod wish;
