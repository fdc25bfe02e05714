use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Label used for store failures that have no more specific operation.
pub const DATABASE_ERROR: &str = "Database error";

#[derive(Debug)]
pub enum AppError {
    /// A store failure, tagged with the operation label reported to clients.
    DatabaseError(&'static str, sqlx::Error),
    MigrationError(sqlx::migrate::MigrateError),
    ConfigError(String),
    InternalError(String),
    NotFound(String),
    /// The request body could not be read or is not a JSON object.
    InvalidRequest(StatusCode, String),
}

impl AppError {
    /// Replaces the client-facing label of a store failure. Other variants
    /// pass through untouched.
    pub fn relabel(self, label: &'static str) -> Self {
        match self {
            AppError::DatabaseError(_, e) => AppError::DatabaseError(label, e),
            other => other,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError(label, e) => write!(f, "{}: {}", label, e),
            AppError::MigrationError(e) => write!(f, "Migration error: {}", e),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidRequest(status, msg) => {
                write!(f, "Invalid request ({}): {}", status, msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::DatabaseError(_, e) => Some(e),
            AppError::MigrationError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(DATABASE_ERROR, err)
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::MigrationError(err)
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::InvalidRequest(rejection.status(), rejection.body_text())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidRequest(StatusCode::BAD_REQUEST, err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::DatabaseError(label, ref e) => {
                tracing::error!("{}: {:?}", label, e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": label, "message": e.to_string() }),
                )
            }
            AppError::MigrationError(ref e) => {
                tracing::error!("Migration error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": DATABASE_ERROR, "message": e.to_string() }),
                )
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server configuration error", "message": msg }),
                )
            }
            AppError::InternalError(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal error", "message": msg }),
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::InvalidRequest(status, ref msg) => (
                status,
                json!({ "error": "Invalid request body", "message": msg }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
