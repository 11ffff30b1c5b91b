//! HTTP adapter for wish and exchange endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateWishRequest, CreatedWishResponse, ExchangeRequest, ExchangeResponse,
    ExchangeViewResponse, WishListItemResponse, WishResponse,
};
pub use handlers::WishAppState;
pub use routes::wish_router;
