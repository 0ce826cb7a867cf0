//! Application layer
//!
//! Contains the item use cases and the service that orchestrates them.

pub mod dto;
pub mod item_service;
pub mod sample_data;
pub mod use_cases;

pub use item_service::ItemService;
pub use sample_data::seed_if_empty;
