//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes and
//! user-facing messages in Russian.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::export::ExportError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database unreachable or not configured (503)
    Unavailable { reason: String },

    /// Database error (500, logged, text returned)
    Database(DbError),

    /// Spreadsheet rendering failed (500)
    Export(ExportError),
}

fn not_found_message(resource: &str) -> &'static str {
    match resource {
        "room" => "Кабинет не найден",
        "item" => "Предмет не найден",
        _ => "Не найдено",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": format!("Некорректные данные: {}", e)
                }),
            ),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "Not found");
                (
                    StatusCode::NOT_FOUND,
                    json!({
                        "error": "not_found",
                        "message": not_found_message(resource)
                    }),
                )
            }
            Self::Unavailable { reason } => {
                tracing::warn!(reason = %reason, "Database unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({
                        "error": "unavailable",
                        "message": "База данных недоступна. Попробуйте позже."
                    }),
                )
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "database_error",
                        "message": format!("Ошибка базы данных: {}", e)
                    }),
                )
            }
            Self::Export(e) => {
                tracing::error!("Export error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "export_error",
                        "message": format!("Ошибка при экспорте: {}", e)
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            e if e.is_unavailable() => Self::Unavailable {
                reason: e.to_string(),
            },
            e => Self::Database(e),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}
