use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, WebhookError};
use crate::services::{ingest, IngestEvent};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct WebhookRequest {
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
    pub user: String,
    pub plan: String,
}

/// Receive a subscription webhook
///
/// POST /api/webhook
///
/// Maps `product_id` to a plan and overwrites the stored subscription for
/// `user_email`. Errors are reported as `{"status": "error", "message": ...}`.
pub async fn receive_webhook(
    State(state): State<AppState>,
    payload: Result<Json<WebhookRequest>, JsonRejection>,
) -> Result<Json<WebhookResponse>, WebhookError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        // A body that isn't declared as JSON carries no fields
        Err(JsonRejection::MissingJsonContentType(_)) => WebhookRequest::default(),
        Err(rejection) => {
            tracing::warn!("Rejected webhook body: {}", rejection.body_text());
            return Err(AppError::InvalidBody.into());
        }
    };

    let event = IngestEvent {
        email: payload.user_email.unwrap_or_default(),
        product_id: payload.product_id.unwrap_or_default(),
        timestamp: payload.timestamp,
    };

    let outcome = ingest(&state.store, event).await?;

    Ok(Json(WebhookResponse {
        status: "success",
        user: outcome.email,
        plan: outcome.plan.as_str().to_string(),
    }))
}
