//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod health;
pub mod items;

pub use health::{health_check, root};
pub use items::{create_item, delete_item, get_item, list_items, search_items, update_item};
