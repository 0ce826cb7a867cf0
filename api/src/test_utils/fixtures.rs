//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use rust_decimal::Decimal;

use crate::app::dto::CreateItemRequest;
use crate::domain::entities::{Item, ItemId};

/// Parse a decimal literal
pub fn price(s: &str) -> Decimal {
    s.parse().unwrap()
}

/// Create a persisted test item with ID 1
pub fn test_item() -> Item {
    Item::with_id(ItemId(1), "Test Item", Some("A test item"), price("9.99"), true).unwrap()
}

/// Create a persisted test item with a specific ID and name
pub fn test_item_named(id: i32, name: &str) -> Item {
    Item::with_id(
        ItemId(id),
        name,
        Some(format!("Description of {}", name).as_str()),
        price("10.00"),
        true,
    )
    .unwrap()
}

/// Create-request body with no description
pub fn create_request(name: &str, price_str: &str) -> CreateItemRequest {
    CreateItemRequest {
        name: name.to_string(),
        description: None,
        price: price(price_str),
        in_stock: true,
    }
}
