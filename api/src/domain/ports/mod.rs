//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod health;
pub mod repositories;

pub use health::HealthCheck;
pub use repositories::ItemRepository;

#[cfg(test)]
pub use repositories::MockItemRepository;
