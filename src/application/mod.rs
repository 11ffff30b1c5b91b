//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (login, create wish, attempt exchange) write; query
//! handlers (get, list, open exchange) only read.

pub mod handlers;

pub use handlers::{
    // Identity
    LoginCommand, LoginHandler, LogoutCommand, LogoutHandler,
    // Wishes
    CreateWishCommand, CreateWishHandler, CreateWishResult, GetWishHandler, GetWishQuery,
    ListWishesHandler, ListWishesQuery, WishListing,
    // Exchange
    AttemptExchangeCommand, AttemptExchangeHandler, OpenExchangeHandler, OpenExchangeQuery,
};
