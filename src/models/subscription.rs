use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::Plan;

/// Field holding the plan inside a stored record
pub const PLAN_FIELD: &str = "userPlan";

/// Subscription record written by the webhook for one email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    #[serde(rename = "userPlan")]
    pub user_plan: Plan,
    /// When the subscription was recorded (Unix timestamp, seconds)
    #[serde(rename = "subscribedAt")]
    pub subscribed_at: i64,
}

impl SubscriptionRecord {
    pub fn new(plan: Plan, subscribed_at: i64) -> Self {
        Self {
            user_plan: plan,
            subscribed_at,
        }
    }

    /// JSON form as stored in the document
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// Full store document: email -> record.
///
/// Records stay untyped so hand-edited entries survive a read-modify-write
/// untouched.
pub type Subscriptions = BTreeMap<String, Value>;

/// Plan stored in a record, whatever its JSON type. `None` when the record
/// has no plan field or it is null.
pub fn stored_plan(record: &Value) -> Option<&Value> {
    record.get(PLAN_FIELD).filter(|plan| !plan.is_null())
}
