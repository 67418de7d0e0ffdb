use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quotes_core::error::CoreError;
use quotes_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for failed store
/// calls. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `quotes_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed store call.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { entity, name }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} named '{name}' not found"),
            ),

            // --- Store errors ---
            AppError::Store(StoreError::MissingField(field)) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                format!("Missing required field: {field}"),
            ),
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - NOT NULL violations (PostgreSQL `23502`) map to 400, naming the column.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23502") => {
            let column = db_err
                .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
                .and_then(|pg| pg.column())
                .unwrap_or("unknown");
            (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                format!("Missing required field: {column}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
