//! Schema bootstrap
//!
//! Creates the tables derived from the SeaORM entities when they are missing.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::items;

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut create_items = schema.create_table_from_entity(items::Entity);
    create_items.if_not_exists();
    db.execute(backend.build(&create_items)).await?;

    tracing::debug!("Schema for table 'items' is in place");
    Ok(())
}
