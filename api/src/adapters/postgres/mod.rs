//! PostgreSQL adapters
//!
//! Implementations of port traits using SeaORM and PostgreSQL.

pub mod health;
pub mod item_repo;
pub mod schema;


pub use health::PostgresHealthCheck;
pub use item_repo::PostgresItemRepository;
pub use schema::ensure_schema;
