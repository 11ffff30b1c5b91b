//! OpenExchangeHandler - Query handler for a viewer's exchange view.
//!
//! Re-opening an unlocked wish shows the same contact again without a new
//! submission.

use std::sync::Arc;

use crate::domain::exchange::{ExchangeError, ExchangeState, ExchangeView, RevealedContact};
use crate::domain::foundation::{UserId, WishId};
use crate::ports::{ContactResolver, WishRepository};

/// Query for what `viewer` sees on a wish's exchange.
#[derive(Debug, Clone)]
pub struct OpenExchangeQuery {
    pub viewer: UserId,
    pub wish_id: WishId,
}

pub struct OpenExchangeHandler {
    repository: Arc<dyn WishRepository>,
    contact_resolver: Arc<dyn ContactResolver>,
}

impl OpenExchangeHandler {
    pub fn new(
        repository: Arc<dyn WishRepository>,
        contact_resolver: Arc<dyn ContactResolver>,
    ) -> Self {
        Self {
            repository,
            contact_resolver,
        }
    }

    pub async fn handle(&self, query: OpenExchangeQuery) -> Result<ExchangeView, ExchangeError> {
        let wish = self
            .repository
            .find_by_id(&query.wish_id)
            .await?
            .ok_or(ExchangeError::NotFound(query.wish_id))?;

        Ok(match ExchangeState::for_viewer(&wish, &query.viewer) {
            ExchangeState::Owner => ExchangeView::Owner,
            ExchangeState::Locked => ExchangeView::Locked { wish },
            ExchangeState::Unlocked => {
                let resolution = self.contact_resolver.resolve_contact(wish.owner_id()).await;
                ExchangeView::Unlocked {
                    contact: RevealedContact::from_resolution(resolution),
                    wish,
                }
            }
        })
    }
}
