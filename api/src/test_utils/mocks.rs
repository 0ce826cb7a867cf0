//! In-memory implementations of port traits
//!
//! These store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Item, ItemId};
use crate::domain::ports::{HealthCheck, ItemRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Item Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<BTreeMap<ItemId, Item>>>,
    last_id: AtomicI32,
    failing: bool,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a persisted item for testing
    pub fn with_item(self, item: Item) -> Self {
        let id = item.id().expect("fixture items must have an ID");
        self.last_id.fetch_max(id.0, Ordering::SeqCst);
        self.items.write().unwrap().insert(id, item);
        self
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    /// Peek at stored state without going through the port
    pub fn get(&self, id: ItemId) -> Option<Item> {
        self.items.read().unwrap().get(&id).cloned()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            return Err(DomainError::Database("simulated storage failure".into()));
        }
        Ok(())
    }

    fn ensure_unique_name(
        items: &BTreeMap<ItemId, Item>,
        name: &str,
        except: Option<ItemId>,
    ) -> Result<(), DomainError> {
        let taken = items
            .values()
            .any(|existing| existing.name() == name && existing.id() != except);
        if taken {
            return Err(DomainError::AlreadyExists(format!(
                "Item with name '{}' already exists",
                name
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, item: &Item) -> Result<Item, DomainError> {
        self.check()?;
        let mut items = self.items.write().unwrap();
        Self::ensure_unique_name(&items, item.name(), None)?;

        let id = ItemId(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let created = Item::with_id(
            id,
            item.name(),
            item.description(),
            item.price(),
            item.in_stock(),
        )?;
        items.insert(id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, DomainError> {
        self.check()?;
        Ok(self.items.read().unwrap().get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Item>, DomainError> {
        self.check()?;
        Ok(self.items.read().unwrap().values().cloned().collect())
    }

    async fn update(&self, item: &Item) -> Result<Option<Item>, DomainError> {
        self.check()?;
        let Some(id) = item.id() else {
            return Err(DomainError::Internal("Cannot update an item without an ID".into()));
        };

        let mut items = self.items.write().unwrap();
        if !items.contains_key(&id) {
            return Ok(None);
        }
        Self::ensure_unique_name(&items, item.name(), Some(id))?;

        items.insert(id, item.clone());
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: ItemId) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.items.write().unwrap().remove(&id).is_some())
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Item>, DomainError> {
        self.check()?;
        let mut found: Vec<Item> = self
            .items
            .read()
            .unwrap()
            .values()
            .filter(|item| item.matches_search_query(query))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(found)
    }
}

// ============================================================================
// Static Health Check
// ============================================================================

/// Health check whose result can be flipped by the test
#[derive(Default)]
pub struct StaticHealthCheck {
    down: AtomicBool,
}

impl StaticHealthCheck {
    pub fn healthy() -> Self {
        Self::default()
    }

    pub fn unhealthy() -> Self {
        Self {
            down: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl HealthCheck for StaticHealthCheck {
    async fn ping(&self) -> Result<(), DomainError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(DomainError::Unavailable("database is down".into()));
        }
        Ok(())
    }
}
