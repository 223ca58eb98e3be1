use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fleetpulse_core::error::CoreError;
use fleetpulse_db::repositories::SnapshotReadError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and `sqlx::Error` for query
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fleetpulse_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<SnapshotReadError> for AppError {
    fn from(err: SnapshotReadError) -> Self {
        match err {
            SnapshotReadError::Database(e) => AppError::Database(e),
            SnapshotReadError::Integrity(e) => AppError::Core(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Integrity { entity, id, detail } => {
                    tracing::error!(entity, id, detail = %detail, "Data integrity violation");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTEGRITY_ERROR",
                        "Stored fleet data is inconsistent".to_string(),
                    )
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
