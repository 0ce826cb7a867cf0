//! Demo catalogue inserted on startup when `SEED_SAMPLE_DATA` is set

use rust_decimal::Decimal;

use crate::app::dto::CreateItemRequest;
use crate::app::ItemService;
use crate::domain::ports::ItemRepository;
use crate::error::AppError;

/// (name, description, price in cents, in stock)
const SAMPLE_ITEMS: [(&str, &str, i64, bool); 5] = [
    (
        "Gaming Laptop",
        "High-performance laptop for gaming and development",
        129_999,
        true,
    ),
    (
        "Wireless Mouse",
        "Ergonomic wireless mouse with precision tracking",
        4_999,
        true,
    ),
    (
        "Mechanical Keyboard",
        "RGB mechanical keyboard with blue switches",
        12_999,
        false,
    ),
    ("Monitor 27 inch", "4K UHD monitor with HDR support", 39_999, true),
    (
        "USB-C Hub",
        "Multi-port USB-C hub with HDMI and ethernet",
        7_999,
        true,
    ),
];

pub fn sample_items() -> Vec<CreateItemRequest> {
    SAMPLE_ITEMS
        .iter()
        .map(|&(name, description, cents, in_stock)| CreateItemRequest {
            name: name.to_string(),
            description: Some(description.to_string()),
            price: Decimal::new(cents, 2),
            in_stock,
        })
        .collect()
}

/// Insert the sample items unless the catalogue already has data.
/// Returns how many items were added.
pub async fn seed_if_empty<R>(service: &ItemService<R>) -> Result<usize, AppError>
where
    R: ItemRepository,
{
    if !service.list_items().await?.is_empty() {
        tracing::debug!("Catalogue not empty, skipping sample data");
        return Ok(0);
    }

    let mut added = 0;
    for request in sample_items() {
        service.create_item(request).await?;
        added += 1;
    }

    tracing::info!(count = added, "Seeded sample items");
    Ok(added)
}
