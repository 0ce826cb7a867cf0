use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use super::{metadata, UseCase, UseCaseResult};
use crate::app::dto::{ItemResponse, SearchItemsRequest};
use crate::domain::ports::ItemRepository;
use crate::error::DomainError;

const MIN_QUERY_LENGTH: usize = 2;
const MAX_QUERY_LENGTH: usize = 100;

/// Case-insensitive substring search over item names and descriptions
pub struct SearchItemsUseCase<R>
where
    R: ItemRepository,
{
    items: Arc<R>,
}

impl<R> SearchItemsUseCase<R>
where
    R: ItemRepository,
{
    pub fn new(items: Arc<R>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl<R> UseCase for SearchItemsUseCase<R>
where
    R: ItemRepository,
{
    type Request = SearchItemsRequest;
    type Response = Vec<ItemResponse>;

    fn name(&self) -> &'static str {
        "search_items"
    }

    fn validate(&self, request: &SearchItemsRequest) -> Result<(), DomainError> {
        let length = request.query.trim().chars().count();
        if length == 0 {
            return Err(DomainError::invalid("Search query cannot be empty"));
        }
        if length < MIN_QUERY_LENGTH {
            return Err(DomainError::invalid(format!(
                "Search query must be at least {} characters",
                MIN_QUERY_LENGTH
            )));
        }
        if length > MAX_QUERY_LENGTH {
            return Err(DomainError::invalid(format!(
                "Search query cannot exceed {} characters",
                MAX_QUERY_LENGTH
            )));
        }
        Ok(())
    }

    async fn run(
        &self,
        request: SearchItemsRequest,
    ) -> Result<UseCaseResult<Vec<ItemResponse>>, DomainError> {
        let normalized = request.query.trim().to_lowercase();

        let items = self
            .items
            .search_by_name(&normalized)
            .await?
            .iter()
            .map(ItemResponse::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let count = items.len();
        tracing::debug!(query = %normalized, count, "Search completed");

        let meta = metadata([
            ("search_query", json!(request.query)),
            ("normalized_query", json!(normalized)),
            ("found_count", json!(count)),
            ("has_results", json!(count > 0)),
        ]);
        let message = format!("Found {} items matching '{}'", count, request.query.trim());

        Ok(UseCaseResult::success(items, message).with_metadata(meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockItemRepository;
    use crate::error::ErrorCode;
    use crate::test_utils::{test_item_named, InMemoryItemRepository};
    use mockall::predicate::eq;

    fn search(query: &str) -> SearchItemsRequest {
        SearchItemsRequest {
            query: query.to_string(),
        }
    }

    #[tokio::test]
    async fn test_search_finds_case_insensitive_matches() {
        let repo = InMemoryItemRepository::new()
            .with_item(test_item_named(1, "Gaming Laptop"))
            .with_item(test_item_named(2, "Wireless Mouse"));
        let use_case = SearchItemsUseCase::new(Arc::new(repo));

        let result = use_case.execute(search("LAPTOP")).await;

        assert!(result.success);
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].name, "Gaming Laptop");
        let meta = result.metadata.unwrap();
        assert_eq!(meta["search_query"], json!("LAPTOP"));
        assert_eq!(meta["normalized_query"], json!("laptop"));
        assert_eq!(meta["found_count"], json!(1));
        assert_eq!(meta["has_results"], json!(true));
    }

    #[tokio::test]
    async fn test_search_returns_all_matches_ordered_by_name() {
        let repo = InMemoryItemRepository::new()
            .with_item(test_item_named(1, "Office Laptop"))
            .with_item(test_item_named(2, "Wireless Mouse"))
            .with_item(test_item_named(3, "Gaming Laptop"));
        let use_case = SearchItemsUseCase::new(Arc::new(repo));

        let result = use_case.execute(search("laptop")).await;

        let names: Vec<_> = result.data.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Gaming Laptop", "Office Laptop"]);
        assert_eq!(result.metadata.unwrap()["found_count"], json!(2));
        assert_eq!(result.message.as_deref(), Some("Found 2 items matching 'laptop'"));
    }

    #[tokio::test]
    async fn test_search_passes_normalized_query() {
        let mut mock = MockItemRepository::new();
        mock.expect_search_by_name()
            .with(eq("laptop"))
            .times(1)
            .returning(|_| Ok(vec![]));
        let use_case = SearchItemsUseCase::new(Arc::new(mock));

        let result = use_case.execute(search("  LapTop ")).await;

        assert!(result.success);
    }

    #[tokio::test]
    async fn test_search_no_results_is_success() {
        let use_case = SearchItemsUseCase::new(Arc::new(InMemoryItemRepository::new()));

        let result = use_case.execute(search("nonexistent123")).await;

        assert!(result.success);
        assert!(result.data.is_empty());
        assert_eq!(result.metadata.unwrap()["has_results"], json!(false));
    }

    #[tokio::test]
    async fn test_search_rejects_bad_queries_without_repository_call() {
        let mut mock = MockItemRepository::new();
        mock.expect_search_by_name().times(0);
        let use_case = SearchItemsUseCase::new(Arc::new(mock));

        let long = "q".repeat(101);
        for query in ["", "   ", "a", " b ", long.as_str()] {
            let result = use_case.execute(search(query)).await;
            assert!(!result.success, "{:?}", query);
            assert!(result.data.is_empty());
            assert_eq!(result.error, Some(ErrorCode::ItemInvalidData));
        }
    }

    #[tokio::test]
    async fn test_search_accepts_length_bounds() {
        let use_case = SearchItemsUseCase::new(Arc::new(InMemoryItemRepository::new()));

        assert!(use_case.execute(search("ab")).await.success);
        assert!(use_case.execute(search(&"q".repeat(100))).await.success);
    }

    #[tokio::test]
    async fn test_search_storage_failure_yields_empty_list() {
        let use_case = SearchItemsUseCase::new(Arc::new(InMemoryItemRepository::failing()));

        let result = use_case.execute(search("laptop")).await;

        assert!(!result.success);
        assert!(result.data.is_empty());
        assert_eq!(result.error, Some(ErrorCode::RepositoryError));
    }
}
