//! Item handlers
//!
//! CRUD and search endpoints for catalogue items.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::app::dto::{CreateItemRequest, DeleteItemResponse, ItemResponse, UpdateItemRequest};
use crate::domain::ports::ItemRepository;
use crate::error::AppError;
use crate::AppState;

/// POST /items
pub async fn create_item<R: ItemRepository + 'static>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), AppError> {
    let Json(request) = payload?;
    let item = state.item_service.create_item(request).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /items
pub async fn list_items<R: ItemRepository + 'static>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = state.item_service.list_items().await?;
    Ok(Json(items))
}

/// GET /items/:id
pub async fn get_item<R: ItemRepository + 'static>(
    State(state): State<AppState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ItemResponse>, AppError> {
    let Path(id) = id?;
    let item = state.item_service.get_item(id).await?;
    Ok(Json(item))
}

/// PUT /items/:id
///
/// Only the fields present in the body are changed.
pub async fn update_item<R: ItemRepository + 'static>(
    State(state): State<AppState<R>>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, AppError> {
    let Path(id) = id?;
    let Json(changes) = payload?;
    let item = state.item_service.update_item(id, changes).await?;
    Ok(Json(item))
}

/// DELETE /items/:id
pub async fn delete_item<R: ItemRepository + 'static>(
    State(state): State<AppState<R>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteItemResponse>, AppError> {
    let Path(id) = id?;
    let deleted = state.item_service.delete_item(id).await?;
    Ok(Json(deleted))
}

/// GET /items/search/:query
pub async fn search_items<R: ItemRepository + 'static>(
    State(state): State<AppState<R>>,
    query: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let Path(query) = query?;
    let items = state.item_service.search_items(&query).await?;
    Ok(Json(items))
}
