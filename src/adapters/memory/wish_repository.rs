//! In-memory wish repository.
//!
//! All wishes live in a single vector guarded by a tokio `RwLock`. Exchange
//! recording happens under the write guard, which serializes concurrent
//! attempts on the same wish.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, WishId};
use crate::domain::wish::{Wish, WishError};
use crate::ports::{wish_not_found, ExchangeRecord, WishRepository};

/// In-memory storage for wishes, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWishRepository {
    wishes: Arc<RwLock<Vec<Wish>>>,
}

impl InMemoryWishRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored wishes.
    pub async fn len(&self) -> usize {
        self.wishes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.wishes.read().await.is_empty()
    }
}

#[async_trait]
impl WishRepository for InMemoryWishRepository {
    async fn save(&self, wish: &Wish) -> Result<(), DomainError> {
        let mut wishes = self.wishes.write().await;
        if wishes.iter().any(|w| w.id() == wish.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Wish already exists: {}", wish.id()),
            ));
        }
        wishes.push(wish.clone());
        Ok(())
    }

    async fn record_exchange(
        &self,
        wish_id: &WishId,
        viewer_id: &UserId,
    ) -> Result<ExchangeRecord, DomainError> {
        let mut wishes = self.wishes.write().await;
        let wish = wishes
            .iter_mut()
            .find(|w| w.id() == wish_id)
            .ok_or_else(|| wish_not_found(wish_id))?;

        let newly_added = wish.record_exchange(viewer_id).map_err(|e| match e {
            WishError::SelfExchange => DomainError::new(ErrorCode::SelfExchange, e.message()),
            other => DomainError::new(other.code(), other.message()),
        })?;

        Ok(ExchangeRecord {
            wish: wish.clone(),
            newly_added,
        })
    }

    async fn find_by_id(&self, id: &WishId) -> Result<Option<Wish>, DomainError> {
        let wishes = self.wishes.read().await;
        Ok(wishes.iter().find(|w| w.id() == id).cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<Wish>, DomainError> {
        let wishes = self.wishes.read().await;
        let mut listed: Vec<Wish> = wishes.iter().rev().cloned().collect();
        // Stable sort keeps later insertions first among equal timestamps.
        listed.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(listed)
    }
}
