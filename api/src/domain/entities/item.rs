//! Item domain entity
//!
//! Represents a catalogue item and owns the rules that keep it valid.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ItemValidationError;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Upper bound for a price (999999.99)
pub fn max_price() -> Decimal {
    Decimal::new(99_999_999, 2)
}

/// Unique identifier for an item, assigned by storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub i32);

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalogue item
///
/// Fields are private so every change goes through a validating mutator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: Option<ItemId>,
    name: String,
    description: Option<String>,
    price: Decimal,
    in_stock: bool,
}

impl Item {
    /// Create a new, not yet persisted item
    pub fn new(
        name: &str,
        description: Option<&str>,
        price: Decimal,
        in_stock: bool,
    ) -> Result<Self, ItemValidationError> {
        Ok(Self {
            id: None,
            name: validate_name(name)?,
            description: validate_description(description)?,
            price: validate_price(price)?,
            in_stock,
        })
    }

    /// Rebuild an item that already has an identity (e.g. loaded from storage)
    pub fn with_id(
        id: ItemId,
        name: &str,
        description: Option<&str>,
        price: Decimal,
        in_stock: bool,
    ) -> Result<Self, ItemValidationError> {
        let mut item = Self::new(name, description, price, in_stock)?;
        item.id = Some(id);
        Ok(item)
    }

    pub fn id(&self) -> Option<ItemId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn rename(&mut self, name: &str) -> Result<(), ItemValidationError> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn update_price(&mut self, price: Decimal) -> Result<(), ItemValidationError> {
        self.price = validate_price(price)?;
        Ok(())
    }

    pub fn update_description(
        &mut self,
        description: Option<&str>,
    ) -> Result<(), ItemValidationError> {
        self.description = validate_description(description)?;
        Ok(())
    }

    pub fn set_in_stock(&mut self) {
        self.in_stock = true;
    }

    pub fn set_out_of_stock(&mut self) {
        self.in_stock = false;
    }

    /// Case-insensitive substring match on name or description.
    /// A blank query matches every item.
    pub fn matches_search_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&query))
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = self
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "None".to_string());
        let stock = if self.in_stock {
            "in stock"
        } else {
            "out of stock"
        };
        write!(
            f,
            "Item(id={}, name='{}', price={}, {})",
            id, self.name, self.price, stock
        )
    }
}

pub(crate) fn validate_name(name: &str) -> Result<String, ItemValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ItemValidationError::EmptyName);
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(ItemValidationError::NameTooLong {
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(trimmed.to_string())
}

pub(crate) fn validate_price(price: Decimal) -> Result<Decimal, ItemValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ItemValidationError::NegativePrice);
    }
    if price > max_price() {
        return Err(ItemValidationError::PriceTooHigh { max: max_price() });
    }
    // Trailing zeros do not count, so 9.990 is accepted as 9.99
    if price.normalize().scale() > PRICE_DECIMAL_PLACES {
        return Err(ItemValidationError::PriceTooPrecise {
            places: PRICE_DECIMAL_PLACES,
        });
    }
    Ok(price)
}

// Blank descriptions are stored as absent
pub(crate) fn validate_description(description: Option<&str>) -> Result<Option<String>, ItemValidationError> {
    let Some(trimmed) = description.map(str::trim).filter(|d| !d.is_empty()) else {
        return Ok(None);
    };
    if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(ItemValidationError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LENGTH,
        });
    }
    Ok(Some(trimmed.to_string()))
}
