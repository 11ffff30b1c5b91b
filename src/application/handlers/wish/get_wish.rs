//! GetWishHandler - Query handler for a single wish.

use std::sync::Arc;

use crate::domain::foundation::WishId;
use crate::domain::wish::{Wish, WishError};
use crate::ports::WishRepository;

/// Query to get a wish by ID.
#[derive(Debug, Clone)]
pub struct GetWishQuery {
    pub wish_id: WishId,
}

/// Handler for retrieving a wish.
pub struct GetWishHandler {
    repository: Arc<dyn WishRepository>,
}

impl GetWishHandler {
    pub fn new(repository: Arc<dyn WishRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetWishQuery) -> Result<Wish, WishError> {
        self.repository
            .find_by_id(&query.wish_id)
            .await?
            .ok_or_else(|| WishError::not_found(query.wish_id))
    }
}
