//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::{
    ENTITY_ACCOUNT, ENTITY_REIMBURSEMENT, ERROR_HEADER, ERROR_KEY_MISSING_ACCOUNT,
    ERROR_KEY_MISSING_PERMISSION, PARAMS_HEADER,
};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Authentication required")]
    Unauthorized,

    /// Permission check failed for an entity operation
    #[error("{message}")]
    NotAuthorized {
        message: String,
        entity: &'static str,
        key: &'static str,
    },

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    /// Malformed request against an entity, reported with an alert key
    #[error("{message}")]
    BadRequestAlert {
        message: String,
        entity: &'static str,
        key: &'static str,
    },

    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'static str>,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::NotAuthorized { .. } => "FORBIDDEN",
            AppError::NotFound => "NOT_FOUND",
            AppError::BadRequestAlert { .. } => "BAD_REQUEST",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Jwt(_) => "AUTH_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::NotAuthorized { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequestAlert { .. } | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Entity and error key for alert-style errors
    fn alert(&self) -> Option<(&'static str, &'static str)> {
        match self {
            AppError::NotAuthorized { entity, key, .. }
            | AppError::BadRequestAlert { entity, key, .. } => Some((*entity, *key)),
            _ => None,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Failure alert headers: `error.{key}` plus the entity name as parameter.
fn failure_alert_headers(entity: &str, key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("error.{}", key)) {
        headers.insert(HeaderName::from_static(ERROR_HEADER), value);
    }
    if let Ok(value) = HeaderValue::from_str(entity) {
        headers.insert(HeaderName::from_static(PARAMS_HEADER), value);
    }
    headers
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let alert = self.alert();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
                entity: alert.map(|(entity, _)| entity),
                key: alert.map(|(_, key)| key),
            },
        };

        match alert {
            Some((entity, key)) => {
                (status, failure_alert_headers(entity, key), Json(body)).into_response()
            }
            None => (status, Json(body)).into_response(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn bad_request_alert(
        msg: impl Into<String>,
        entity: &'static str,
        key: &'static str,
    ) -> Self {
        AppError::BadRequestAlert {
            message: msg.into(),
            entity,
            key,
        }
    }

    /// Permission denied on a reimbursement operation
    pub fn missing_permission() -> Self {
        AppError::NotAuthorized {
            message: "User not authorized".to_string(),
            entity: ENTITY_REIMBURSEMENT,
            key: ERROR_KEY_MISSING_PERMISSION,
        }
    }

    /// Authenticated login without an account
    pub fn missing_account() -> Self {
        AppError::NotAuthorized {
            message: "No account is linked to the current user".to_string(),
            entity: ENTITY_ACCOUNT,
            key: ERROR_KEY_MISSING_ACCOUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ERROR_KEY_ID_EXISTS, ERROR_KEY_ID_NULL};

    #[test]
    fn bad_request_alert_maps_to_400_with_failure_headers() {
        let err = AppError::bad_request_alert(
            "A new reimbursement cannot already have an ID",
            ENTITY_REIMBURSEMENT,
            ERROR_KEY_ID_EXISTS,
        );
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[ERROR_HEADER], "error.idexists");
        assert_eq!(response.headers()[PARAMS_HEADER], "reimbursement");
    }

    #[test]
    fn missing_permission_maps_to_403() {
        let response = AppError::missing_permission().into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(response.headers()[ERROR_HEADER], "error.missing_permission");
    }

    #[test]
    fn plain_errors_carry_no_alert_headers() {
        let response = AppError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(ERROR_HEADER).is_none());

        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn alert_errors_display_their_message() {
        let err = AppError::bad_request_alert("Invalid id", ENTITY_REIMBURSEMENT, ERROR_KEY_ID_NULL);
        assert_eq!(err.to_string(), "Invalid id");
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = AppError::internal("connection pool exhausted");
        assert_eq!(err.user_message(), "An internal error occurred");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
