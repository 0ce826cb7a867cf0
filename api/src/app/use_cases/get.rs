use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::{metadata, UseCase, UseCaseResult};
use crate::app::dto::ItemResponse;
use crate::domain::entities::ItemId;
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

/// Fetch a single item by ID
pub struct GetItemByIdUseCase<R>
where
    R: ItemRepository,
{
    items: Arc<R>,
}

impl<R> GetItemByIdUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }
}

pub(super) fn validate_item_id(id: ItemId) -> Result<(), DomainError> {
    if id.0 <= 0 {
        return Err(DomainError::invalid("Item ID must be a positive integer"));
    }
    Ok(())
}

pub(super) fn not_found(id: ItemId) -> DomainError {
    DomainError::NotFound(format!("Item with ID {} not found", id))
}

#[async_trait]
impl<R> UseCase for GetItemByIdUseCase<R>
where
    R: ItemRepository,
{
    type Request = ItemId;
    type Response = Option<ItemResponse>;

    fn name(&self) -> &'static str {
        "get_item"
    }

    fn validate(&self, id: &ItemId) -> Result<(), DomainError> {
        validate_item_id(*id)
    }

    async fn run(&self, id: ItemId) -> Result<UseCaseResult<Option<ItemResponse>>, DomainError> {
        let item = self.items.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
        let response = ItemResponse::try_from(&item)?;

        Ok(
            UseCaseResult::success(Some(response), "Item retrieved successfully")
                .with_metadata(metadata([("item_id", json!(id.0))])),
        )
    }
}
