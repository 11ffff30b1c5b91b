//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresWishRepository` - Wishes and exchange participation
//!
//! Schema lives in `migrations/` and is applied with `sqlx::migrate!`.

mod wish_repository;

pub use wish_repository::PostgresWishRepository;
