//! Wish command and query handlers.

mod create_wish;
mod get_wish;
mod list_wishes;

pub use create_wish::{
    CreateWishCommand, CreateWishHandler, CreateWishResult, DEFAULT_IMAGE_TIMEOUT,
};
pub use get_wish::{GetWishHandler, GetWishQuery};
pub use list_wishes::{ListWishesHandler, ListWishesQuery, WishListing};
