use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::get::{not_found, validate_item_id};
use super::{metadata, UseCase, UseCaseResult};
use crate::app::dto::DeleteItemResponse;
use crate::domain::entities::ItemId;
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

/// Delete an item, reporting its name back to the caller
pub struct DeleteItemUseCase<R>
where
    R: ItemRepository,
{
    items: Arc<R>,
}

impl<R> DeleteItemUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<R> UseCase for DeleteItemUseCase<R>
where
    R: ItemRepository,
{
    type Request = ItemId;
    type Response = Option<DeleteItemResponse>;

    fn name(&self) -> &'static str {
        "delete_item"
    }

    fn validate(&self, id: &ItemId) -> Result<(), DomainError> {
        validate_item_id(*id)
    }

    async fn run(
        &self,
        id: ItemId,
    ) -> Result<UseCaseResult<Option<DeleteItemResponse>>, DomainError> {
        // Read first so the response can name what was removed
        let item = self.items.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if !self.items.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(item_id = id.0, name = %item.name(), "Item deleted");

        let message = format!("Item '{}' deleted successfully", item.name());
        let meta = metadata([
            ("deleted_item_id", json!(id.0)),
            ("deleted_item_name", json!(item.name())),
        ]);
        let response = DeleteItemResponse {
            message: message.clone(),
            deleted_item_id: id.0,
            deleted_item_name: item.name().to_string(),
        };

        Ok(UseCaseResult::success(Some(response), message).with_metadata(meta))
    }
}
