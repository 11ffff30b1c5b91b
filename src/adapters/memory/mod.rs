//! In-process adapters.
//!
//! - `InMemoryWishRepository` - Wish store backed by a locked vector
//! - `InMemoryIdentityProvider` - Users, sessions and contact lookup
//! - `seed_demo_data` - Demo users and wishes

mod identity;
mod seed;
mod wish_repository;

pub use identity::InMemoryIdentityProvider;
pub use seed::seed_demo_data;
pub use wish_repository::InMemoryWishRepository;
