//! Wish Exchange - a small wish-sharing service.
//!
//! Users publish short wishes, each illustrated by a generated image. Anyone
//! logged in can browse them; to see a wish owner's contact details a viewer
//! must first write a reciprocal wish of their own. That "exchange" is
//! recorded once per (wish, viewer) pair and unlocks the contact for good.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
