//! ListWishesHandler - Query handler for the wish feed.

use std::sync::Arc;

use crate::domain::exchange::ViewerState;
use crate::domain::foundation::UserId;
use crate::domain::wish::{Wish, WishError};
use crate::ports::WishRepository;

/// Query for all wishes, as seen by an optional viewer.
#[derive(Debug, Clone, Default)]
pub struct ListWishesQuery {
    pub viewer: Option<UserId>,
}

/// A wish in the feed with the viewer's state on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishListing {
    pub wish: Wish,
    pub viewer_state: ViewerState,
}

/// Handler for listing wishes newest first.
pub struct ListWishesHandler {
    repository: Arc<dyn WishRepository>,
}

impl ListWishesHandler {
    pub fn new(repository: Arc<dyn WishRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListWishesQuery) -> Result<Vec<WishListing>, WishError> {
        let wishes = self.repository.list_newest_first().await?;
        Ok(wishes
            .into_iter()
            .map(|wish| WishListing {
                viewer_state: ViewerState::for_viewer(&wish, query.viewer.as_ref()),
                wish,
            })
            .collect())
    }
}
