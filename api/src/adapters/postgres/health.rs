//! PostgreSQL adapter for HealthCheck

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::domain::ports::HealthCheck;
use crate::error::DomainError;

pub struct PostgresHealthCheck {
    db: DatabaseConnection,
}

impl PostgresHealthCheck {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthCheck for PostgresHealthCheck {
    async fn ping(&self) -> Result<(), DomainError> {
        self.db.ping().await?;
        Ok(())
    }
}
