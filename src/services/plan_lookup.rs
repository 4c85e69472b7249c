use serde_json::Value;

use crate::constants::DEFAULT_PLAN;
use crate::db::JsonStore;
use crate::error::{AppError, Result};
use crate::models::stored_plan;

/// Plan currently assigned to an email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanLookup {
    /// Usually a plan name string, but hand-edited records are passed
    /// through with whatever JSON value they hold.
    pub plan: Value,
}

/// Look up the plan for `email`.
///
/// Emails with no stored record, or whose record has no plan, get the
/// default free plan. Stored plans are returned as-is, without checking them
/// against known plans.
pub async fn get_plan(store: &JsonStore, email: &str) -> Result<PlanLookup> {
    if email.is_empty() {
        return Err(AppError::MissingEmail);
    }

    let subscriptions = store.read().await;

    let plan = match subscriptions.get(email).and_then(stored_plan) {
        Some(plan) => plan.clone(),
        None => Value::from(DEFAULT_PLAN.as_str()),
    };

    Ok(PlanLookup { plan })
}
