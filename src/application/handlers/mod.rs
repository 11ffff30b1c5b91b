//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod exchange;
pub mod identity;
pub mod wish;

pub use exchange::{
    AttemptExchangeCommand, AttemptExchangeHandler, OpenExchangeHandler, OpenExchangeQuery,
};
pub use identity::{LoginCommand, LoginHandler, LogoutCommand, LogoutHandler};
pub use wish::{
    CreateWishCommand, CreateWishHandler, CreateWishResult, GetWishHandler, GetWishQuery,
    ListWishesHandler, ListWishesQuery, WishListing, DEFAULT_IMAGE_TIMEOUT,
};
