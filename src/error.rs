//! Application error type and its HTTP mapping.
//!
//! Every failure is rendered as `{"error": "<message>"}`. Storage and internal
//! failures are logged and replaced by a generic message so no database detail
//! reaches the client.

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Message returned for any storage or internal failure.
pub const GENERIC_SERVER_ERROR: &str = "Server error";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// Rendered as 400, matching the public contract for duplicate target URLs.
    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("{message}")]
    Upstream { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Storage { .. } | AppError::Upstream { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to return to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Unauthorized { message }
            | AppError::Upstream { message } => message.clone(),
            AppError::Storage { .. } | AppError::Internal { .. } => {
                GENERIC_SERVER_ERROR.to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict("Short code already exists");
        }

        AppError::storage(e.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::bad_request("Invalid request body")
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        tracing::debug!("Rejected form body: {}", rejection.body_text());
        AppError::bad_request("Invalid request body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::conflict("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::storage("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::upstream("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_message_is_hidden() {
        let err = AppError::storage("connection refused on 10.0.0.5:5432");
        assert_eq!(err.public_message(), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_message_is_public() {
        let err = AppError::upstream("Failed to get IP address");
        assert_eq!(err.public_message(), "Failed to get IP address");
    }

    #[test]
    fn test_not_found_message_is_public() {
        let err = AppError::not_found("URL not found");
        assert_eq!(err.to_string(), "URL not found");
        assert_eq!(err.public_message(), "URL not found");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::unauthorized("Unauthorized").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
