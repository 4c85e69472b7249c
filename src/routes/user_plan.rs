use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::services::get_plan;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UserPlanParams {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserPlanResponse {
    #[serde(rename = "userPlan")]
    pub user_plan: Value,
}

/// Get the subscription plan for an email
///
/// GET /api/user-plan?email=<email>
///
/// Unknown emails get the free plan. Returns 400 when `email` is missing,
/// empty, or given more than once.
pub async fn get_user_plan(
    State(state): State<AppState>,
    params: std::result::Result<Query<UserPlanParams>, QueryRejection>,
) -> Result<Json<UserPlanResponse>> {
    let Query(params) = params.map_err(|rejection| {
        tracing::warn!("Rejected plan lookup query: {}", rejection.body_text());
        AppError::MissingEmail
    })?;
    let email = params.email.unwrap_or_default();
    let lookup = get_plan(&state.store, &email).await?;

    Ok(Json(UserPlanResponse {
        user_plan: lookup.plan,
    }))
}
