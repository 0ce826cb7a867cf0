//! PostgreSQL adapter for ItemRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionError, TransactionTrait,
};

use crate::domain::entities::{Item, ItemId};
use crate::domain::ports::ItemRepository;
use crate::entity::items;
use crate::error::DomainError;

/// PostgreSQL implementation of ItemRepository
pub struct PostgresItemRepository {
    db: DatabaseConnection,
}

impl PostgresItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn create(&self, item: &Item) -> Result<Item, DomainError> {
        let name = item.name().to_string();
        let now = Utc::now().fixed_offset();

        let model = items::ActiveModel {
            id: NotSet,
            name: Set(name.clone()),
            description: Set(item.description().map(str::to_string)),
            price: Set(item.price()),
            in_stock: Set(item.in_stock()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // Rolled back if the name is taken or the insert fails
        let result = self
            .db
            .transaction::<_, items::Model, DomainError>(|txn| {
                Box::pin(async move {
                    let existing = items::Entity::find()
                        .filter(items::Column::Name.eq(name.as_str()))
                        .one(txn)
                        .await?;
                    if existing.is_some() {
                        return Err(duplicate_name(&name));
                    }

                    model.insert(txn).await.map_err(|e| write_error(e, &name))
                })
            })
            .await
            .map_err(unwrap_transaction_error)?;

        result.try_into()
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, DomainError> {
        let result = items::Entity::find_by_id(id.0).one(&self.db).await?;

        result.map(Item::try_from).transpose()
    }

    async fn get_all(&self) -> Result<Vec<Item>, DomainError> {
        let results = items::Entity::find()
            .order_by_asc(items::Column::Id)
            .all(&self.db)
            .await?;

        results.into_iter().map(Item::try_from).collect()
    }

    async fn update(&self, item: &Item) -> Result<Option<Item>, DomainError> {
        let id = item
            .id()
            .ok_or_else(|| DomainError::Internal("Cannot update an item without an ID".into()))?;
        let name = item.name().to_string();
        let description = item.description().map(str::to_string);
        let price = item.price();
        let in_stock = item.in_stock();

        let result = self
            .db
            .transaction::<_, Option<items::Model>, DomainError>(|txn| {
                Box::pin(async move {
                    let Some(existing) = items::Entity::find_by_id(id.0).one(txn).await? else {
                        return Ok(None);
                    };

                    let mut model: items::ActiveModel = existing.into();
                    model.name = Set(name.clone());
                    model.description = Set(description);
                    model.price = Set(price);
                    model.in_stock = Set(in_stock);
                    model.updated_at = Set(Utc::now().fixed_offset());

                    model
                        .update(txn)
                        .await
                        .map(Some)
                        .map_err(|e| write_error(e, &name))
                })
            })
            .await
            .map_err(unwrap_transaction_error)?;

        result.map(Item::try_from).transpose()
    }

    async fn delete(&self, id: ItemId) -> Result<bool, DomainError> {
        let result = items::Entity::delete_by_id(id.0).exec(&self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn search_by_name(&self, query: &str) -> Result<Vec<Item>, DomainError> {
        let pattern = LikeExpr::new(contains_pattern(query)).escape(LIKE_ESCAPE);

        let results = items::Entity::find()
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(items::Column::Name)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(items::Column::Description)))
                            .like(pattern),
                    ),
            )
            .order_by_asc(items::Column::Name)
            .all(&self.db)
            .await?;

        results.into_iter().map(Item::try_from).collect()
    }
}

const LIKE_ESCAPE: char = '\\';

/// `LIKE` pattern matching `query` as a literal, lowercased substring
fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn duplicate_name(name: &str) -> DomainError {
    DomainError::AlreadyExists(format!("Item with name '{}' already exists", name))
}

/// Map a failed insert/update, turning unique violations into duplicates
fn write_error(e: DbErr, name: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_name(name),
        _ => e.into(),
    }
}

fn unwrap_transaction_error(e: TransactionError<DomainError>) -> DomainError {
    match e {
        TransactionError::Connection(e) => e.into(),
        TransactionError::Transaction(e) => e,
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<items::Model> for Item {
    type Error = DomainError;

    fn try_from(model: items::Model) -> Result<Self, Self::Error> {
        Item::with_id(
            ItemId(model.id),
            &model.name,
            model.description.as_deref(),
            model.price,
            model.in_stock,
        )
        .map_err(|e| {
            DomainError::Internal(format!("Stored item {} is invalid: {}", model.id, e))
        })
    }
}
