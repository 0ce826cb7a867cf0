//! Unified error types for the Item Catalogue API
//!
//! This module defines error types for each layer:
//! - `ItemValidationError`: Item entity invariant violations
//! - `DomainError`: Repository and use case errors
//! - `ErrorCode`: Explicit tag carried on failed use case results
//! - `AppError`: Application layer errors (mapped to HTTP responses)

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Machine-readable error codes shared by use case results and HTTP bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ItemNotFound,
    ItemInvalidData,
    ItemDuplicate,
    ItemInvalidPrice,
    ItemInvalidName,
    ItemInvalidDescription,
    RepositoryError,
    DatabaseConnectionError,
    InternalServerError,
}

/// Coarse classification of an error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidData,
    Duplicate,
    Storage,
    Internal,
}

impl ErrorCode {
    pub fn kind(self) -> ErrorKind {
        match self {
            ErrorCode::ItemNotFound => ErrorKind::NotFound,
            ErrorCode::ItemInvalidData
            | ErrorCode::ItemInvalidPrice
            | ErrorCode::ItemInvalidName
            | ErrorCode::ItemInvalidDescription => ErrorKind::InvalidData,
            ErrorCode::ItemDuplicate => ErrorKind::Duplicate,
            ErrorCode::RepositoryError | ErrorCode::DatabaseConnectionError => ErrorKind::Storage,
            ErrorCode::InternalServerError => ErrorKind::Internal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ItemNotFound => "ITEM_NOT_FOUND",
            ErrorCode::ItemInvalidData => "ITEM_INVALID_DATA",
            ErrorCode::ItemDuplicate => "ITEM_DUPLICATE",
            ErrorCode::ItemInvalidPrice => "ITEM_INVALID_PRICE",
            ErrorCode::ItemInvalidName => "ITEM_INVALID_NAME",
            ErrorCode::ItemInvalidDescription => "ITEM_INVALID_DESCRIPTION",
            ErrorCode::RepositoryError => "REPOSITORY_ERROR",
            ErrorCode::DatabaseConnectionError => "DATABASE_CONNECTION_ERROR",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item invariant violations raised by the entity constructor and mutators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemValidationError {
    #[error("Item name cannot be empty")]
    EmptyName,

    #[error("Item name cannot exceed {max} characters")]
    NameTooLong { max: usize },

    #[error("Item price cannot be negative")]
    NegativePrice,

    #[error("Item price cannot exceed {max}")]
    PriceTooHigh { max: Decimal },

    #[error("Item price cannot have more than {places} decimal places")]
    PriceTooPrecise { places: u32 },

    #[error("Item description cannot exceed {max} characters")]
    DescriptionTooLong { max: usize },
}

impl ItemValidationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ItemValidationError::EmptyName | ItemValidationError::NameTooLong { .. } => {
                ErrorCode::ItemInvalidName
            }
            ItemValidationError::NegativePrice
            | ItemValidationError::PriceTooHigh { .. }
            | ItemValidationError::PriceTooPrecise { .. } => ErrorCode::ItemInvalidPrice,
            ItemValidationError::DescriptionTooLong { .. } => ErrorCode::ItemInvalidDescription,
        }
    }
}

/// Domain layer errors - raised by repositories and use cases
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {message}")]
    Validation { code: ErrorCode, message: String },

    #[error("Invalid item data: {0}")]
    InvalidItem(#[from] ItemValidationError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Request-shape validation failure with the generic invalid data code
    pub fn invalid(message: impl Into<String>) -> Self {
        DomainError::Validation {
            code: ErrorCode::ItemInvalidData,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::NotFound(_) => ErrorCode::ItemNotFound,
            DomainError::AlreadyExists(_) => ErrorCode::ItemDuplicate,
            DomainError::Validation { code, .. } => *code,
            DomainError::InvalidItem(e) => e.code(),
            DomainError::Database(_) => ErrorCode::RepositoryError,
            DomainError::Unavailable(_) => ErrorCode::DatabaseConnectionError,
            DomainError::Internal(_) => ErrorCode::InternalServerError,
        }
    }

    /// Variant name, reported as `error_type` in failed result metadata
    pub fn kind_name(&self) -> &'static str {
        match self {
            DomainError::NotFound(_) => "NotFound",
            DomainError::AlreadyExists(_) => "AlreadyExists",
            DomainError::Validation { .. } => "Validation",
            DomainError::InvalidItem(_) => "InvalidItem",
            DomainError::Database(_) => "Database",
            DomainError::Unavailable(_) => "Unavailable",
            DomainError::Internal(_) => "Internal",
        }
    }

    /// Message without the variant prefix, suitable for result envelopes
    pub fn message(&self) -> String {
        match self {
            DomainError::NotFound(msg)
            | DomainError::AlreadyExists(msg)
            | DomainError::Validation { message: msg, .. } => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                DomainError::Unavailable(e.to_string())
            }
            _ => DomainError::Database(e.to_string()),
        }
    }
}

/// Application layer errors - returned by the item service and HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {message}")]
    InvalidData { code: ErrorCode, message: String },

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Storage error: {message}")]
    Storage { code: ErrorCode, message: String },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Build the typed error for a failed use case result from its error code
    pub fn from_failure(code: ErrorCode, message: String) -> Self {
        match code.kind() {
            ErrorKind::NotFound => AppError::NotFound(message),
            ErrorKind::InvalidData => AppError::InvalidData { code, message },
            ErrorKind::Duplicate => AppError::Duplicate(message),
            ErrorKind::Storage => AppError::Storage { code, message },
            ErrorKind::Internal => AppError::Internal(message),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::ItemNotFound,
            AppError::InvalidData { code, .. } | AppError::Storage { code, .. } => *code,
            AppError::Duplicate(_) => ErrorCode::ItemDuplicate,
            AppError::Internal(_) => ErrorCode::InternalServerError,
            AppError::BadRequest(_) => ErrorCode::ItemInvalidData,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::from_failure(e.code(), e.message())
    }
}

// Malformed bodies and path segments get the same JSON error shape as
// everything else instead of axum's plain-text rejection.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, error, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::InvalidData { message, .. } => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(message.clone()),
            ),
            AppError::Duplicate(msg) => {
                (StatusCode::CONFLICT, "Already exists", Some(msg.clone()))
            }
            AppError::Storage { code, message } => {
                tracing::error!(%code, "Storage error: {}", message);
                let status = if *code == ErrorCode::DatabaseConnectionError {
                    StatusCode::SERVICE_UNAVAILABLE
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                (status, "A database error occurred", None)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            code,
            details,
        });

        (status, body).into_response()
    }
}
