//! Request and response shapes exchanged with the use cases
//!
//! These double as the JSON bodies of the HTTP API. Prices travel as JSON
//! numbers and are parsed into `Decimal` without going through binary floats.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Item, ItemId};
use crate::error::DomainError;

fn default_in_stock() -> bool {
    true
}

/// Body of `POST /items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

/// Body of `PUT /items/:id`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// An empty string clears the description
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

impl UpdateItemRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.in_stock.is_none()
    }
}

/// Update use case input: target ID plus the partial changes
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateItemCommand {
    pub id: ItemId,
    pub changes: UpdateItemRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItemsRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub in_stock: bool,
}

impl TryFrom<&Item> for ItemResponse {
    type Error = DomainError;

    fn try_from(item: &Item) -> Result<Self, Self::Error> {
        let id = item
            .id()
            .ok_or_else(|| DomainError::Internal("Item ID cannot be empty in a response".into()))?;

        Ok(Self {
            id: id.0,
            name: item.name().to_string(),
            description: item.description().map(str::to_string),
            price: item.price(),
            in_stock: item.in_stock(),
        })
    }
}

/// Body returned by `DELETE /items/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteItemResponse {
    pub message: String,
    pub deleted_item_id: i32,
    pub deleted_item_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_create_request_defaults() {
        let json = r#"{"name": "Widget", "price": 9.99}"#;
        let request: CreateItemRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name, "Widget");
        assert_eq!(request.description, None);
        assert_eq!(request.price, "9.99".parse::<Decimal>().unwrap());
        assert!(request.in_stock);
    }

    #[test]
    fn parse_create_request_integer_price() {
        let json = r#"{"name": "Widget", "price": 10, "in_stock": false}"#;
        let request: CreateItemRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.price, Decimal::from(10));
        assert!(!request.in_stock);
    }

    #[test]
    fn parse_create_request_missing_price() {
        let json = r#"{"name": "Widget"}"#;
        let result: Result<CreateItemRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn parse_create_request_rejects_unknown_fields() {
        let json = r#"{"name": "Widget", "price": 1, "colour": "red"}"#;
        let result: Result<CreateItemRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn parse_partial_update() {
        let json = r#"{"price": 19.99}"#;
        let request: UpdateItemRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.price, Some("19.99".parse().unwrap()));
        assert_eq!(request.name, None);
        assert_eq!(request.in_stock, None);
        assert!(!request.is_empty());

        let empty: UpdateItemRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn serialize_item_response_price_as_number() {
        let response = ItemResponse {
            id: 1,
            name: "Widget".to_string(),
            description: None,
            price: "9.99".parse().unwrap(),
            in_stock: true,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["price"], serde_json::json!(9.99));
        assert_eq!(value["description"], serde_json::Value::Null);
    }

    #[test]
    fn response_requires_persisted_item() {
        let item = Item::new("Widget", None, Decimal::ONE, true).unwrap();
        assert!(ItemResponse::try_from(&item).is_err());

        let item = Item::with_id(ItemId(3), "Widget", None, Decimal::ONE, true).unwrap();
        assert_eq!(ItemResponse::try_from(&item).unwrap().id, 3);
    }
}
