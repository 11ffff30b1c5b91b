//! Exchange domain module.
//!
//! The wish-exchange state machine: for each (wish, viewer) pair the viewer
//! is the `Owner`, `Locked` or `Unlocked`. Completing an exchange moves a
//! viewer from `Locked` to `Unlocked` and discloses the owner's contact.

mod errors;
mod reveal;
mod state;

use serde::Serialize;

use crate::domain::wish::Wish;

pub use errors::ExchangeError;
pub use reveal::{ContactSource, ContactUnresolved, RevealedContact, PLACEHOLDER_CONTACT};
pub use state::{ExchangeState, ViewerState};

/// Result of a successful exchange attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeOutcome {
    pub wish: Wish,
    pub contact: RevealedContact,
    /// False when the viewer had already exchanged (idempotent re-entry).
    pub newly_unlocked: bool,
    /// True when `wish.exchanged.v1` went out for this call.
    pub event_published: bool,
}

/// What a viewer sees when opening the exchange for a wish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ExchangeView {
    Owner,
    Locked { wish: Wish },
    Unlocked { wish: Wish, contact: RevealedContact },
}

impl ExchangeView {
    pub fn state(&self) -> ExchangeState {
        match self {
            ExchangeView::Owner => ExchangeState::Owner,
            ExchangeView::Locked { .. } => ExchangeState::Locked,
            ExchangeView::Unlocked { .. } => ExchangeState::Unlocked,
        }
    }
}
