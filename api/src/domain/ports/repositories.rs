//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Item, ItemId};
use crate::error::DomainError;

/// Repository for Item entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item and return it with its assigned ID.
    /// Fails with `DomainError::AlreadyExists` when the name is taken.
    async fn create(&self, item: &Item) -> Result<Item, DomainError>;

    /// Find an item by ID
    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, DomainError>;

    /// List all items ordered by ID
    async fn get_all(&self) -> Result<Vec<Item>, DomainError>;

    /// Overwrite a stored item. Returns `None` if it no longer exists.
    async fn update(&self, item: &Item) -> Result<Option<Item>, DomainError>;

    /// Delete an item. Returns `false` if nothing was deleted.
    async fn delete(&self, id: ItemId) -> Result<bool, DomainError>;

    /// Case-insensitive substring search over name and description, ordered by name
    async fn search_by_name(&self, query: &str) -> Result<Vec<Item>, DomainError>;
}
