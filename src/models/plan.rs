use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::PRODUCT_PLANS;

/// Subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Starter,
    Plus,
    Pro,
}

impl Plan {
    /// Plan identifier as stored and returned over the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Starter => "starter",
            Plan::Plus => "plus",
            Plan::Pro => "pro",
        }
    }

    /// Resolve the plan sold under a product ID, if the product is known
    pub fn from_product_id(product_id: &str) -> Option<Plan> {
        PRODUCT_PLANS
            .iter()
            .find(|(id, _)| *id == product_id)
            .map(|(_, plan)| *plan)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
