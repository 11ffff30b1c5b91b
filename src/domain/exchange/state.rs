//! Exchange state for a (wish, viewer) pair.
//!
//! The state is never stored. It is derived from the wish's owner and its
//! `exchanged_with` set every time it is needed.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{StateMachine, UserId};
use crate::domain::wish::Wish;

/// Progress of one identified viewer on one wish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeState {
    /// Viewer owns the wish; no exchange is offered.
    Owner,
    /// Viewer has not exchanged yet.
    Locked,
    /// Viewer has exchanged; the owner's contact is visible.
    Unlocked,
}

impl ExchangeState {
    pub fn for_viewer(wish: &Wish, viewer: &UserId) -> Self {
        if wish.is_owner(viewer) {
            ExchangeState::Owner
        } else if wish.has_exchanged_with(viewer) {
            ExchangeState::Unlocked
        } else {
            ExchangeState::Locked
        }
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, ExchangeState::Unlocked)
    }
}

impl StateMachine for ExchangeState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ExchangeState::*;
        // Unlocked -> Unlocked is the idempotent re-entry.
        matches!((self, target), (Locked, Unlocked) | (Unlocked, Unlocked))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ExchangeState::*;
        match self {
            Owner => vec![],
            Locked => vec![Unlocked],
            Unlocked => vec![Unlocked],
        }
    }
}

/// What a listing shows for a wish, including visitors who are not logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerState {
    Anonymous,
    Owner,
    Locked,
    Unlocked,
}

impl ViewerState {
    pub fn for_viewer(wish: &Wish, viewer: Option<&UserId>) -> Self {
        match viewer {
            None => ViewerState::Anonymous,
            Some(id) => ExchangeState::for_viewer(wish, id).into(),
        }
    }
}

impl From<ExchangeState> for ViewerState {
    fn from(state: ExchangeState) -> Self {
        match state {
            ExchangeState::Owner => ViewerState::Owner,
            ExchangeState::Locked => ViewerState::Locked,
            ExchangeState::Unlocked => ViewerState::Unlocked,
        }
    }
}
