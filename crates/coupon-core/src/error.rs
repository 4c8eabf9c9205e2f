//! Unified error types for all layers of the application.

use crate::CouponId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use thiserror::Error;

/// Message returned to clients for every unclassified failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Please try again later.";

/// Message used for request shape failures that carry a field map.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed.";

/// Field name to first error message.
pub type FieldErrors = BTreeMap<String, String>;

/// Unified error type for all layers of the coupon service.
///
/// Request errors are raised at the HTTP boundary before any use case runs.
/// Domain errors carry 404 and 422 outcomes. Everything else is a 500.
#[derive(Error, Debug)]
pub enum CouponError {
    // ============ Request Errors ============
    /// Missing or malformed input at the boundary
    #[error("{message}")]
    Validation {
        message: String,
        details: FieldErrors,
    },

    /// Request body over the configured size limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// No route matches the request path
    #[error("No resource found at {0}.")]
    RouteNotFound(String),

    /// The path exists but does not accept the method
    #[error("Method {method} is not allowed for {path}.")]
    MethodNotAllowed { method: String, path: String },

    // ============ Domain Errors ============
    /// Resource not found
    #[error("{resource_type} with id {id} not found or already removed.")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Business rule violation
    #[error("{0}")]
    BusinessRule(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CouponError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::NotFound { .. } | Self::RouteNotFound(_) => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::PayloadTooLarge(_) => 413,
            Self::BusinessRule(_) => 422,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns the reason phrase matching [`Self::status_code`].
    #[must_use]
    pub const fn reason_phrase(&self) -> &'static str {
        match self.status_code() {
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            413 => "Payload Too Large",
            422 => "Unprocessable Entity",
            _ => "Internal Server Error",
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::RouteNotFound(_) => "ROUTE_NOT_FOUND",
            Self::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            Self::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for failures whose details must not reach clients.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Returns the message that is safe to show to a client.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.is_server_error() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a shape error without field details.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation {
            message: message.into(),
            details: FieldErrors::new(),
        }
    }

    /// Creates a shape error keyed by field.
    #[must_use]
    pub fn invalid_fields(details: FieldErrors) -> Self {
        Self::Validation {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            details,
        }
    }

    /// Creates a business rule violation.
    #[must_use]
    pub fn business_rule<T: Into<String>>(message: T) -> Self {
        Self::BusinessRule(message.into())
    }

    /// Creates the violation raised when a code is already taken.
    #[must_use]
    pub fn duplicate_code(code: &str) -> Self {
        Self::BusinessRule(format!("A coupon with code '{code}' already exists."))
    }

    /// Creates the violation raised when a coupon is deleted a second time.
    #[must_use]
    pub fn already_removed(id: CouponId) -> Self {
        Self::BusinessRule(format!("The coupon with id {id} has already been removed."))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the error was caused by a unique constraint.
    #[cfg(feature = "sqlx")]
    #[must_use]
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for CouponError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "Row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::BusinessRule(db_err.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::migrate::MigrateError> for CouponError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Database(format!("Migration failed: {err}"))
    }
}

/// Serializable error envelope returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// When the error was produced
    pub timestamp: DateTime<Utc>,
    /// HTTP status code
    pub status: u16,
    /// HTTP reason phrase
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Field-level messages, only present for shape errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FieldErrors>,
}

impl ErrorResponse {
    /// Creates a new error response from a `CouponError`.
    #[must_use]
    pub fn from_error(error: &CouponError) -> Self {
        let details = match error {
            CouponError::Validation { details, .. } if !details.is_empty() => Some(details.clone()),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            status: error.status_code(),
            error: error.reason_phrase().to_string(),
            message: error.public_message(),
            details,
        }
    }
}

impl From<&CouponError> for ErrorResponse {
    fn from(error: &CouponError) -> Self {
        Self::from_error(error)
    }
}
