use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{
    ERR_EMAIL_REQUIRED, ERR_INTERNAL, ERR_INVALID_BODY, ERR_INVALID_PRODUCT,
    ERR_MISSING_WEBHOOK_FIELDS,
};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{}", ERR_EMAIL_REQUIRED)]
    MissingEmail,

    #[error("{}", ERR_MISSING_WEBHOOK_FIELDS)]
    MissingWebhookFields,

    #[error("{}", ERR_INVALID_PRODUCT)]
    InvalidProduct,

    #[error("{}", ERR_INVALID_BODY)]
    InvalidBody,
}

impl AppError {
    /// Status code and client-facing message. Internal errors are logged here
    /// and collapse to a generic message.
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Io(e) => {
                tracing::error!("Store I/O error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, ERR_INTERNAL)
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, ERR_INTERNAL)
            }
            AppError::MissingEmail => (StatusCode::BAD_REQUEST, ERR_EMAIL_REQUIRED),
            AppError::MissingWebhookFields => (StatusCode::BAD_REQUEST, ERR_MISSING_WEBHOOK_FIELDS),
            AppError::InvalidProduct => (StatusCode::BAD_REQUEST, ERR_INVALID_PRODUCT),
            AppError::InvalidBody => (StatusCode::BAD_REQUEST, ERR_INVALID_BODY),
        }
    }
}

/// Renders as `{"error": ...}`, the shape used by the plan lookup endpoint
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Error wrapper for the webhook endpoint, which reports failures as
/// `{"status": "error", "message": ...}`
#[derive(Debug)]
pub struct WebhookError(pub AppError);

impl From<AppError> for WebhookError {
    fn from(err: AppError) -> Self {
        WebhookError(err)
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();

        let body = Json(json!({
            "status": "error",
            "message": message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
