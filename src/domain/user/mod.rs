//! User module - wishers and their (sensitive) contact details.
//!
//! Users are created by the identity provider at login and never change
//! afterwards. Only the display name is public; the contact string is
//! revealed exclusively through a completed exchange.

mod profile;

pub use profile::{PublicProfile, User, MAX_CONTACT_INFO_LENGTH, MAX_DISPLAY_NAME_LENGTH};
