//! Result envelope returned by every use case

use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, DomainError, ErrorCode};

/// Free-form key/value annotations attached to a result
pub type Metadata = serde_json::Map<String, Value>;

/// Build a metadata map from key/value pairs
pub fn metadata<const N: usize>(entries: [(&str, Value); N]) -> Metadata {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Outcome of a use case run
///
/// A failed result always carries an error code and a non-empty message.
/// Its `data` is the response type's default (`None`, empty list).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseCaseResult<T> {
    pub data: T,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl<T> UseCaseResult<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            success: true,
            message: Some(message.into()),
            metadata: None,
            error: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Unwrap the payload, turning a failure into the matching `AppError`
    pub fn into_result(self) -> Result<T, AppError> {
        if self.success {
            return Ok(self.data);
        }

        let code = self.error.unwrap_or(ErrorCode::InternalServerError);
        let message = self.message.unwrap_or_else(|| code.to_string());
        Err(AppError::from_failure(code, message))
    }
}

impl<T: Default> UseCaseResult<T> {
    pub fn failure(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            code.to_string()
        } else {
            message
        };

        Self {
            data: T::default(),
            success: false,
            message: Some(message),
            metadata: None,
            error: Some(code),
        }
    }

    /// Failure for an error raised while running, tagged with its kind
    pub fn from_error(err: &DomainError) -> Self {
        Self::failure(err.code(), err.message()).with_metadata(metadata([(
            "error_type",
            Value::from(err.kind_name()),
        )]))
    }
}
