//! Wish aggregate entity.
//!
//! A wish is created once, with its image already resolved, and afterwards
//! only ever grows its `exchanged_with` set. It is never edited or deleted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError, WishId};
use crate::domain::user::User;

use super::{ImageRef, WishError};

/// Maximum length for wish (and reciprocal) descriptions.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Wish aggregate.
///
/// # Invariants
///
/// - `id` and `owner_id` never change
/// - `description` is non-empty after trimming
/// - `exchanged_with` is append-only and holds each viewer at most once
/// - the owner never appears in `exchanged_with`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    id: WishId,
    owner_id: UserId,

    /// Snapshot of the owner's display name at creation.
    owner_display_name: String,

    description: String,
    image_ref: ImageRef,
    created_at: Timestamp,

    /// Viewers who completed an exchange, in the order they did so.
    exchanged_with: Vec<UserId>,
}

impl Wish {
    /// Creates a new wish owned by `owner`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the description is blank
    /// - `TooLong` if the description exceeds `MAX_DESCRIPTION_LENGTH`
    pub fn create(
        owner: &User,
        description: &str,
        image_ref: ImageRef,
    ) -> Result<Self, ValidationError> {
        let description = validate_description("description", description)?;

        Ok(Self {
            id: WishId::new(),
            owner_id: owner.id().clone(),
            owner_display_name: owner.display_name().to_string(),
            description,
            image_ref,
            created_at: Timestamp::now(),
            exchanged_with: Vec::new(),
        })
    }

    /// Reconstitute a wish from persistence (no validation).
    pub fn reconstitute(
        id: WishId,
        owner_id: UserId,
        owner_display_name: String,
        description: String,
        image_ref: ImageRef,
        created_at: Timestamp,
        exchanged_with: Vec<UserId>,
    ) -> Self {
        Self {
            id,
            owner_id,
            owner_display_name,
            description,
            image_ref,
            created_at,
            exchanged_with,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &WishId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn owner_display_name(&self) -> &str {
        &self.owner_display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_ref(&self) -> &ImageRef {
        &self.image_ref
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn exchanged_with(&self) -> &[UserId] {
        &self.exchanged_with
    }

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    pub fn has_exchanged_with(&self, user_id: &UserId) -> bool {
        self.exchanged_with.contains(user_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records that `viewer` completed an exchange on this wish.
    ///
    /// Returns `true` if the viewer was newly added, `false` if they were
    /// already present (idempotent re-entry).
    ///
    /// # Errors
    ///
    /// - `SelfExchange` if `viewer` owns the wish
    pub fn record_exchange(&mut self, viewer: &UserId) -> Result<bool, WishError> {
        if self.is_owner(viewer) {
            return Err(WishError::SelfExchange);
        }
        if self.has_exchanged_with(viewer) {
            return Ok(false);
        }
        self.exchanged_with.push(viewer.clone());
        Ok(true)
    }
}

/// Validates a free-text description, returning the trimmed text.
pub fn validate_description(field: &str, text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = trimmed.chars().count();
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::too_long(field, MAX_DESCRIPTION_LENGTH, len));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn alice() -> User {
        User::register("Alice", "wx:alice").unwrap()
    }

    fn northern_lights(owner: &User) -> Wish {
        Wish::create(
            owner,
            "see the northern lights",
            ImageRef::new("https://img.example.com/aurora.png"),
        )
        .unwrap()
    }

    #[test]
    fn create_snapshots_owner_and_starts_unexchanged() {
        let owner = alice();
        let wish = northern_lights(&owner);

        assert_eq!(wish.owner_id(), owner.id());
        assert_eq!(wish.owner_display_name(), "Alice");
        assert_eq!(wish.description(), "see the northern lights");
        assert!(wish.exchanged_with().is_empty());
    }

    #[test]
    fn create_rejects_blank_description() {
        let result = Wish::create(&alice(), "  \n ", ImageRef::new("x"));
        assert_eq!(result.unwrap_err(), ValidationError::empty_field("description"));
    }

    #[test]
    fn create_rejects_overlong_description() {
        let text = "a".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert!(matches!(
            Wish::create(&alice(), &text, ImageRef::new("x")),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn created_wishes_get_distinct_ids() {
        let owner = alice();
        assert_ne!(northern_lights(&owner).id(), northern_lights(&owner).id());
    }

    #[test]
    fn record_exchange_adds_viewer_once() {
        let mut wish = northern_lights(&alice());
        let bob = UserId::new("bob").unwrap();

        assert_eq!(wish.record_exchange(&bob), Ok(true));
        assert_eq!(wish.record_exchange(&bob), Ok(false));
        assert_eq!(wish.exchanged_with(), &[bob.clone()]);
        assert!(wish.has_exchanged_with(&bob));
    }

    #[test]
    fn record_exchange_rejects_owner() {
        let owner = alice();
        let mut wish = northern_lights(&owner);

        assert_eq!(wish.record_exchange(owner.id()), Err(WishError::SelfExchange));
        assert!(wish.exchanged_with().is_empty());
    }

    #[test]
    fn serializes_without_owner_contact() {
        let wish = northern_lights(&alice());
        let json = serde_json::to_string(&wish).unwrap();
        assert!(!json.contains("wx:alice"));
    }

    proptest! {
        #[test]
        fn exchanged_with_is_a_growing_set_without_owner(viewers in proptest::collection::vec(0u8..6, 0..40)) {
            let owner = User::with_id(UserId::new("v0").unwrap(), "Owner", "c").unwrap();
            let mut wish = northern_lights(&owner);
            let mut previous_len = 0;

            for v in viewers {
                let viewer = UserId::new(format!("v{}", v)).unwrap();
                let _ = wish.record_exchange(&viewer);

                let seen = wish.exchanged_with();
                prop_assert!(seen.len() >= previous_len);
                prop_assert!(!seen.contains(owner.id()));
                let mut unique = seen.to_vec();
                unique.sort();
                unique.dedup();
                prop_assert_eq!(unique.len(), seen.len());
                previous_len = seen.len();
            }
        }
    }
}
