//! Test utilities
//!
//! In-memory port implementations and test fixtures for unit testing.
//!
//! `InMemoryItemRepository` behaves like the real store (ID assignment,
//! unique names) so use cases and the HTTP router can be exercised end to end.
//! When a test must prove the repository is never touched, use the
//! mockall-generated `MockItemRepository` instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
