//! Error types for the task API
//!
//! Each layer has its own vocabulary:
//! - `StorageError`: repository errors, keeps the underlying database error
//! - `DomainError`: application layer errors, the kind only
//! - `AppError`: HTTP layer errors (wraps domain errors for responses)
//!
//! The `From` impls below are the only places one vocabulary is translated
//! into the next.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Repository errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("entity not found")]
    NotFound,

    #[error("entity already exists")]
    AlreadyExists,

    #[error("internal storage error: {0}")]
    Internal(#[source] sea_orm::DbErr),
}

/// Application layer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("entity not found")]
    NotFound,

    #[error("entity already exists")]
    AlreadyExists,

    #[error("internal error")]
    Internal,
}

impl From<StorageError> for DomainError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound => DomainError::NotFound,
            StorageError::AlreadyExists => DomainError::AlreadyExists,
            StorageError::Internal(cause) => {
                // The cause stops here; later layers only see the kind.
                tracing::error!(error = %cause, "Storage failure");
                DomainError::Internal
            }
        }
    }
}

/// HTTP layer errors - used by handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Malformed request body, identifier or query string
    #[error("{0}")]
    Decode(String),
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Decode(e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::Decode(e.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Domain(DomainError::AlreadyExists) => StatusCode::CONFLICT,
            AppError::Domain(DomainError::Internal) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Decode(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Decode(msg) = &self {
            tracing::debug!("Rejected request: {}", msg);
        }

        let body = ErrorResponse {
            message: self.to_string(),
        };

        match serde_json::to_vec(&body) {
            Ok(bytes) => (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                bytes,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to encode error response: {}", e);
                (status, "internal error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_domain_kinds() {
        assert_eq!(
            DomainError::from(StorageError::NotFound),
            DomainError::NotFound
        );
        assert_eq!(
            DomainError::from(StorageError::AlreadyExists),
            DomainError::AlreadyExists
        );
        assert_eq!(
            DomainError::from(StorageError::Internal(sea_orm::DbErr::Custom(
                "disk full".to_string()
            ))),
            DomainError::Internal
        );
    }

    #[test]
    fn storage_internal_keeps_cause() {
        let err = StorageError::Internal(sea_orm::DbErr::Custom("disk full".to_string()));
        assert!(err.to_string().contains("disk full"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn app_error_status_mapping() {
        assert_eq!(
            AppError::from(DomainError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(DomainError::AlreadyExists).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(DomainError::Internal).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Decode("bad".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn into_response_uses_mapped_status() {
        let response = AppError::from(DomainError::NotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn serialize_error_response() {
        let body = ErrorResponse {
            message: DomainError::NotFound.to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"entity not found"}"#);
    }
}
