//! Item service
//!
//! Entry point for the HTTP layer. Runs the item use cases against one shared
//! repository and turns failed results into `AppError`s.

use std::sync::Arc;

use crate::app::dto::{
    CreateItemRequest, DeleteItemResponse, ItemResponse, SearchItemsRequest, UpdateItemCommand,
    UpdateItemRequest,
};
use crate::app::use_cases::{
    CreateItemUseCase, DeleteItemUseCase, GetAllItemsUseCase, GetItemByIdUseCase,
    SearchItemsUseCase, UpdateItemUseCase, UseCase,
};
use crate::domain::entities::ItemId;
use crate::domain::ports::ItemRepository;
use crate::error::AppError;

/// Service for managing catalogue items
pub struct ItemService<R>
where
    R: ItemRepository,
{
    create: CreateItemUseCase<R>,
    get: GetItemByIdUseCase<R>,
    list: GetAllItemsUseCase<R>,
    update: UpdateItemUseCase<R>,
    delete: DeleteItemUseCase<R>,
    search: SearchItemsUseCase<R>,
}

// A successful single-item result always carries its payload
fn require<T>(data: Option<T>) -> Result<T, AppError> {
    data.ok_or_else(|| AppError::Internal("Use case succeeded without a result".to_string()))
}

impl<R> ItemService<R>
where
    R: ItemRepository,
{
    pub fn new(items: Arc<R>) -> Self {
        Self {
            create: CreateItemUseCase::new(items.clone()),
            get: GetItemByIdUseCase::new(items.clone()),
            list: GetAllItemsUseCase::new(items.clone()),
            update: UpdateItemUseCase::new(items.clone()),
            delete: DeleteItemUseCase::new(items.clone()),
            search: SearchItemsUseCase::new(items),
        }
    }

    pub async fn create_item(&self, request: CreateItemRequest) -> Result<ItemResponse, AppError> {
        require(self.create.execute(request).await.into_result()?)
    }

    pub async fn get_item(&self, id: i32) -> Result<ItemResponse, AppError> {
        require(self.get.execute(ItemId(id)).await.into_result()?)
    }

    pub async fn list_items(&self) -> Result<Vec<ItemResponse>, AppError> {
        self.list.execute(()).await.into_result()
    }

    pub async fn update_item(
        &self,
        id: i32,
        changes: UpdateItemRequest,
    ) -> Result<ItemResponse, AppError> {
        let command = UpdateItemCommand {
            id: ItemId(id),
            changes,
        };
        require(self.update.execute(command).await.into_result()?)
    }

    pub async fn delete_item(&self, id: i32) -> Result<DeleteItemResponse, AppError> {
        require(self.delete.execute(ItemId(id)).await.into_result()?)
    }

    pub async fn search_items(&self, query: &str) -> Result<Vec<ItemResponse>, AppError> {
        let request = SearchItemsRequest {
            query: query.to_string(),
        };
        self.search.execute(request).await.into_result()
    }
}
