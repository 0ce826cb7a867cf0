use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::{metadata, UseCase, UseCaseResult};
use crate::app::dto::ItemResponse;
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

/// List every item
pub struct GetAllItemsUseCase<R>
where
    R: ItemRepository,
{
    items: Arc<R>,
}

impl<R> GetAllItemsUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<R> UseCase for GetAllItemsUseCase<R>
where
    R: ItemRepository,
{
    type Request = ();
    type Response = Vec<ItemResponse>;

    fn name(&self) -> &'static str {
        "list_items"
    }

    async fn run(&self, _request: ()) -> Result<UseCaseResult<Vec<ItemResponse>>, DomainError> {
        let items = self
            .items
            .get_all()
            .await?
            .iter()
            .map(ItemResponse::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let count = items.len();
        Ok(
            UseCaseResult::success(items, format!("Retrieved {} items", count)).with_metadata(
                metadata([
                    ("total_count", json!(count)),
                    ("has_items", json!(count > 0)),
                ]),
            ),
        )
    }
}
