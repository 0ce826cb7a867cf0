use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::{metadata, UseCase, UseCaseResult};
use crate::app::dto::{CreateItemRequest, ItemResponse};
use crate::domain::entities::item::{validate_description, validate_name, validate_price};
use crate::domain::entities::Item;
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

/// Create a new item
pub struct CreateItemUseCase<R>
where
    R: ItemRepository,
{
    items: Arc<R>,
}

impl<R> CreateItemUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<R> UseCase for CreateItemUseCase<R>
where
    R: ItemRepository,
{
    type Request = CreateItemRequest;
    type Response = Option<ItemResponse>;

    fn name(&self) -> &'static str {
        "create_item"
    }

    fn validate(&self, request: &CreateItemRequest) -> Result<(), DomainError> {
        validate_name(&request.name)?;
        validate_price(request.price)?;
        validate_description(request.description.as_deref())?;
        Ok(())
    }

    async fn run(
        &self,
        request: CreateItemRequest,
    ) -> Result<UseCaseResult<Option<ItemResponse>>, DomainError> {
        let item = Item::new(
            &request.name,
            request.description.as_deref(),
            request.price,
            request.in_stock,
        )?;

        let created = self.items.create(&item).await?;
        let response = ItemResponse::try_from(&created)?;

        tracing::info!(item_id = response.id, name = %response.name, "Item created");

        let meta = metadata([("created_item_id", json!(response.id))]);
        Ok(UseCaseResult::success(Some(response), "Item created successfully").with_metadata(meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockItemRepository;
    use crate::error::ErrorCode;
    use crate::test_utils::{create_request, price, InMemoryItemRepository};

    #[tokio::test]
    async fn test_create_item_success() {
        let repo = Arc::new(InMemoryItemRepository::new());
        let use_case = CreateItemUseCase::new(repo.clone());

        let result = use_case.execute(create_request("Widget", "9.99")).await;

        assert!(result.success);
        let item = result.data.unwrap();
        assert!(item.id > 0);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, price("9.99"));
        assert!(item.in_stock);
        assert_eq!(result.message.as_deref(), Some("Item created successfully"));
        assert_eq!(result.metadata.unwrap()["created_item_id"], json!(item.id));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_create_item_trims_name() {
        let use_case = CreateItemUseCase::new(Arc::new(InMemoryItemRepository::new()));

        let result = use_case.execute(create_request("  Widget  ", "1")).await;

        assert_eq!(result.data.unwrap().name, "Widget");
    }

    #[tokio::test]
    async fn test_create_item_blank_name_skips_repository() {
        let mut mock = MockItemRepository::new();
        mock.expect_create().times(0);
        let use_case = CreateItemUseCase::new(Arc::new(mock));

        let result = use_case.execute(create_request("   ", "1")).await;

        assert!(!result.success);
        assert_eq!(result.data, None);
        assert_eq!(result.error, Some(ErrorCode::ItemInvalidName));
    }

    #[tokio::test]
    async fn test_create_item_negative_price_skips_repository() {
        let mut mock = MockItemRepository::new();
        mock.expect_create().times(0);
        let use_case = CreateItemUseCase::new(Arc::new(mock));

        let result = use_case.execute(create_request("Widget", "-1")).await;

        assert!(!result.success);
        assert_eq!(result.error, Some(ErrorCode::ItemInvalidPrice));
    }

    #[tokio::test]
    async fn test_create_item_out_of_range_fields_skip_repository() {
        let mut mock = MockItemRepository::new();
        mock.expect_create().times(0);
        let use_case = CreateItemUseCase::new(Arc::new(mock));

        let result = use_case.execute(create_request(&"n".repeat(101), "1")).await;
        assert_eq!(result.error, Some(ErrorCode::ItemInvalidName));

        let result = use_case.execute(create_request("Widget", "9.999")).await;
        assert_eq!(result.error, Some(ErrorCode::ItemInvalidPrice));

        let mut request = create_request("Widget", "1");
        request.description = Some("d".repeat(501));
        let result = use_case.execute(request).await;
        assert_eq!(result.error, Some(ErrorCode::ItemInvalidDescription));
    }

    #[tokio::test]
    async fn test_create_item_entity_rules_apply() {
        let use_case = CreateItemUseCase::new(Arc::new(InMemoryItemRepository::new()));

        let result = use_case.execute(create_request(&"n".repeat(101), "1")).await;
        assert_eq!(result.error, Some(ErrorCode::ItemInvalidName));

        let result = use_case.execute(create_request("Widget", "1000000")).await;
        assert_eq!(result.error, Some(ErrorCode::ItemInvalidPrice));
    }

    #[tokio::test]
    async fn test_create_item_duplicate_name() {
        let use_case = CreateItemUseCase::new(Arc::new(InMemoryItemRepository::new()));

        assert!(use_case.execute(create_request("Widget", "1")).await.success);
        let result = use_case.execute(create_request("Widget", "2")).await;

        assert!(!result.success);
        assert_eq!(result.error, Some(ErrorCode::ItemDuplicate));
        assert_eq!(result.metadata.unwrap()["error_type"], json!("AlreadyExists"));
    }

    #[tokio::test]
    async fn test_create_item_storage_failure() {
        let use_case = CreateItemUseCase::new(Arc::new(InMemoryItemRepository::failing()));

        let result = use_case.execute(create_request("Widget", "1")).await;

        assert!(!result.success);
        assert_eq!(result.error, Some(ErrorCode::RepositoryError));
    }
}
