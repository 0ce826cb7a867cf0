//! Health check port
//!
//! Lets the health endpoint probe storage without knowing the driver.

use async_trait::async_trait;

use crate::error::DomainError;

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Round-trip to the database
    async fn ping(&self) -> Result<(), DomainError>;
}
