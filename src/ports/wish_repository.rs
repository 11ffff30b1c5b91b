//! Wish repository port.
//!
//! Defines the contract for persisting wishes and recording exchange
//! participation. Wishes are append-only: there is no update or delete.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, UserId, WishId};
use crate::domain::wish::Wish;

/// Result of recording an exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRecord {
    /// The wish after the exchange was recorded.
    pub wish: Wish,
    /// False if the viewer was already present.
    pub newly_added: bool,
}

/// Repository port for the Wish aggregate.
///
/// Implementations must ensure:
/// - `record_exchange` is atomic per wish, so concurrent calls for the same
///   viewer leave exactly one entry
/// - `list_newest_first` orders by `created_at` descending, newest insertion
///   first on ties
#[async_trait]
pub trait WishRepository: Send + Sync {
    /// Save a newly created wish.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, wish: &Wish) -> Result<(), DomainError>;

    /// Idempotently add `viewer_id` to the wish's `exchanged_with` set.
    ///
    /// # Errors
    ///
    /// - `WishNotFound` (with a `wish_id` detail) if the wish does not exist
    /// - `SelfExchange` if `viewer_id` owns the wish
    /// - `DatabaseError` on persistence failure
    async fn record_exchange(
        &self,
        wish_id: &WishId,
        viewer_id: &UserId,
    ) -> Result<ExchangeRecord, DomainError>;

    /// Find a wish by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &WishId) -> Result<Option<Wish>, DomainError>;

    /// All wishes, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Wish>, DomainError>;
}

/// Builds the not-found error every adapter returns for a missing wish.
pub fn wish_not_found(id: &WishId) -> DomainError {
    DomainError::new(ErrorCode::WishNotFound, format!("Wish not found: {}", id))
        .with_detail("wish_id", id.to_string())
}
