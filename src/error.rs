use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Record store error: {0}")]
    RecordStore(String),
    #[error("Email service error: {0}")]
    Email(String),
    #[error("Service credentials error: {0}")]
    Credentials(String),
    #[error("Template error: {0}")]
    Template(String),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Every failure collapses to the same client-facing body; the
        // underlying cause stays in the server logs.
        match &self {
            AppError::RecordStore(msg) => error!("Record store failure: {}", msg),
            AppError::Email(msg) => error!("Email dispatch failure: {}", msg),
            AppError::Credentials(msg) => error!("Credentials failure: {}", msg),
            AppError::Template(msg) => error!("Template render failure: {}", msg),
            AppError::Internal => error!("Internal error"),
        }

        let body = Json(json!({
            "success": false,
            "message": "Failed to submit form"
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
