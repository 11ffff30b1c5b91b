//! HTTP DTOs for wish and exchange endpoints.
//!
//! Responses never carry an owner's contact details except inside a
//! completed exchange.

use serde::{Deserialize, Serialize};

use crate::application::handlers::wish::{CreateWishResult, WishListing};
use crate::domain::exchange::{
    ContactSource, ExchangeOutcome, ExchangeState, ExchangeView, RevealedContact, ViewerState,
};
use crate::domain::wish::Wish;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWishRequest {
    #[serde(default)]
    pub description: String,
}

/// The viewer's reciprocal wish.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRequest {
    #[serde(default)]
    pub description: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishResponse {
    pub id: String,
    pub owner_id: String,
    pub owner_display_name: String,
    pub description: String,
    pub image_url: String,
    pub created_at: String,
    pub exchange_count: usize,
}

impl From<&Wish> for WishResponse {
    fn from(wish: &Wish) -> Self {
        Self {
            id: wish.id().to_string(),
            owner_id: wish.owner_id().to_string(),
            owner_display_name: wish.owner_display_name().to_string(),
            description: wish.description().to_string(),
            image_url: wish.image_ref().as_str().to_string(),
            created_at: wish.created_at().as_datetime().to_rfc3339(),
            exchange_count: wish.exchanged_with().len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedWishResponse {
    #[serde(flatten)]
    pub wish: WishResponse,
    /// True when the placeholder image was used.
    pub image_fallback: bool,
}

impl From<CreateWishResult> for CreatedWishResponse {
    fn from(result: CreateWishResult) -> Self {
        Self {
            wish: WishResponse::from(&result.wish),
            image_fallback: result.image.is_fallback(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishListItemResponse {
    #[serde(flatten)]
    pub wish: WishResponse,
    pub viewer_state: ViewerState,
}

impl From<WishListing> for WishListItemResponse {
    fn from(listing: WishListing) -> Self {
        Self {
            wish: WishResponse::from(&listing.wish),
            viewer_state: listing.viewer_state,
        }
    }
}

/// Result of `POST /api/wishes/:id/exchange`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeResponse {
    pub contact: String,
    pub contact_source: ContactSource,
    pub newly_unlocked: bool,
}

impl From<ExchangeOutcome> for ExchangeResponse {
    fn from(outcome: ExchangeOutcome) -> Self {
        let RevealedContact { contact, source } = outcome.contact;
        Self {
            contact,
            contact_source: source,
            newly_unlocked: outcome.newly_unlocked,
        }
    }
}

/// Result of `GET /api/wishes/:id/exchange`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeViewResponse {
    pub state: ExchangeState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wish: Option<WishResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_source: Option<ContactSource>,
}

impl From<ExchangeView> for ExchangeViewResponse {
    fn from(view: ExchangeView) -> Self {
        let state = view.state();
        match view {
            ExchangeView::Owner => Self {
                state,
                wish: None,
                contact: None,
                contact_source: None,
            },
            ExchangeView::Locked { wish } => Self {
                state,
                wish: Some(WishResponse::from(&wish)),
                contact: None,
                contact_source: None,
            },
            ExchangeView::Unlocked { wish, contact } => Self {
                state,
                wish: Some(WishResponse::from(&wish)),
                contact: Some(contact.contact),
                contact_source: Some(contact.source),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::User;
    use crate::domain::wish::ImageRef;

    fn sample_wish() -> Wish {
        let owner = User::register("Alice", "wx:alice").unwrap();
        Wish::create(&owner, "A trip to see the aurora", ImageRef::new("https://img/1")).unwrap()
    }

    #[test]
    fn wish_response_does_not_leak_contact() {
        let json = serde_json::to_string(&WishResponse::from(&sample_wish())).unwrap();
        assert!(json.contains("Alice"));
        assert!(!json.contains("wx:alice"));
    }

    #[test]
    fn list_item_flattens_wish_fields() {
        let item = WishListItemResponse {
            wish: WishResponse::from(&sample_wish()),
            viewer_state: ViewerState::Anonymous,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["description"], "A trip to see the aurora");
        assert_eq!(json["viewer_state"], "anonymous");
    }

    #[test]
    fn locked_view_has_no_contact() {
        let response = ExchangeViewResponse::from(ExchangeView::Locked { wish: sample_wish() });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["state"], "locked");
        assert!(json.get("contact").is_none());
    }

    #[test]
    fn unlocked_view_carries_contact() {
        let response = ExchangeViewResponse::from(ExchangeView::Unlocked {
            wish: sample_wish(),
            contact: RevealedContact::from_owner("wx:alice"),
        });
        assert_eq!(response.state, ExchangeState::Unlocked);
        assert_eq!(response.contact.as_deref(), Some("wx:alice"));
        assert_eq!(response.contact_source, Some(ContactSource::Owner));
    }

    #[test]
    fn exchange_request_defaults_missing_description() {
        let req: ExchangeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.description.is_empty());
    }
}
