//! Item use cases
//!
//! Each use case validates its request, talks to the repository port and
//! reports the outcome as a [`UseCaseResult`]. Errors never escape `execute`.

mod create;
mod delete;
mod get;
mod get_all;
mod result;
mod search;
mod update;

use async_trait::async_trait;

use crate::error::{DomainError, ErrorKind};

pub use create::CreateItemUseCase;
pub use delete::DeleteItemUseCase;
pub use get::GetItemByIdUseCase;
pub use get_all::GetAllItemsUseCase;
pub use result::{metadata, UseCaseResult};
pub use search::SearchItemsUseCase;
pub use update::UpdateItemUseCase;

#[async_trait]
pub trait UseCase: Send + Sync {
    type Request: Send + Sync;
    type Response: Default + Send;

    /// Short name used in log fields
    fn name(&self) -> &'static str;

    /// Check the request shape. A rejected request never reaches the repository.
    fn validate(&self, _request: &Self::Request) -> Result<(), DomainError> {
        Ok(())
    }

    async fn run(
        &self,
        request: Self::Request,
    ) -> Result<UseCaseResult<Self::Response>, DomainError>;

    /// Validate then run, folding every error into a failed result
    async fn execute(&self, request: Self::Request) -> UseCaseResult<Self::Response> {
        if let Err(e) = self.validate(&request) {
            tracing::debug!(
                use_case = self.name(),
                code = %e.code(),
                "Request rejected: {}",
                e.message()
            );
            return UseCaseResult::failure(e.code(), e.message());
        }

        match self.run(request).await {
            Ok(result) => result,
            Err(e) => {
                match e.code().kind() {
                    ErrorKind::Storage | ErrorKind::Internal => {
                        tracing::warn!(use_case = self.name(), error = %e, "Use case failed")
                    }
                    _ => tracing::debug!(use_case = self.name(), error = %e, "Use case failed"),
                }
                UseCaseResult::from_error(&e)
            }
        }
    }
}
