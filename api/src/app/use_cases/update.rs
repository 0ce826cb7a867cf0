use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::get::{not_found, validate_item_id};
use super::{metadata, UseCase, UseCaseResult};
use crate::app::dto::{ItemResponse, UpdateItemCommand, UpdateItemRequest};
use crate::domain::entities::item::{validate_description, validate_name, validate_price};
use crate::domain::entities::Item;
use crate::domain::ports::ItemRepository;
use crate::error::{DomainError, ItemValidationError};

/// Apply a partial update to an existing item
pub struct UpdateItemUseCase<R>
where
    R: ItemRepository,
{
    items: Arc<R>,
}

impl<R> UpdateItemUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }
}

// Fields left as None are untouched. The entity mutators re-check each value.
fn apply_changes(item: &mut Item, changes: &UpdateItemRequest) -> Result<(), ItemValidationError> {
    if let Some(name) = &changes.name {
        item.rename(name)?;
    }
    if let Some(description) = &changes.description {
        item.update_description(Some(description))?;
    }
    if let Some(price) = changes.price {
        item.update_price(price)?;
    }
    match changes.in_stock {
        Some(true) => item.set_in_stock(),
        Some(false) => item.set_out_of_stock(),
        None => {}
    }
    Ok(())
}

#[async_trait]
impl<R> UseCase for UpdateItemUseCase<R>
where
    R: ItemRepository,
{
    type Request = UpdateItemCommand;
    type Response = Option<ItemResponse>;

    fn name(&self) -> &'static str {
        "update_item"
    }

    fn validate(&self, command: &UpdateItemCommand) -> Result<(), DomainError> {
        validate_item_id(command.id)?;

        let changes = &command.changes;
        if changes.is_empty() {
            return Err(DomainError::invalid(
                "At least one field must be provided for update",
            ));
        }
        // Same rules the entity mutators apply, checked before the item is fetched
        if let Some(name) = &changes.name {
            validate_name(name)?;
        }
        if let Some(description) = &changes.description {
            validate_description(Some(description.as_str()))?;
        }
        if let Some(price) = changes.price {
            validate_price(price)?;
        }
        Ok(())
    }

    async fn run(
        &self,
        command: UpdateItemCommand,
    ) -> Result<UseCaseResult<Option<ItemResponse>>, DomainError> {
        let id = command.id;
        let mut item = self
            .items
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        apply_changes(&mut item, &command.changes)?;

        // The row may have been deleted since it was read
        let updated = self.items.update(&item).await?.ok_or_else(|| not_found(id))?;
        let response = ItemResponse::try_from(&updated)?;

        tracing::info!(item_id = id.0, "Item updated");

        Ok(
            UseCaseResult::success(Some(response), "Item updated successfully")
                .with_metadata(metadata([("updated_item_id", json!(id.0))])),
        )
    }
}
