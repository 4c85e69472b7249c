use crate::models::Plan;

/// Plan reported for emails with no stored subscription
pub const DEFAULT_PLAN: Plan = Plan::Free;

/// Product ID to plan mapping for incoming subscription webhooks
pub const PRODUCT_PLANS: [(&str, Plan); 3] = [
    ("prod_4MFFcp902Sp1aXMWsBSuRG", Plan::Starter),
    ("prod_m0Fosk4j2ceapiwZkf5Wg", Plan::Plus),
    ("prod_4Tezu3Ozv3ETbXMolp2dYr", Plan::Pro),
];

/// Environment name in which the server does not bind its own listener
pub const PRODUCTION_ENVIRONMENT: &str = "production";

// =============================================================================
// Error Messages
// =============================================================================

/// Lookup called without an email query parameter
pub const ERR_EMAIL_REQUIRED: &str = "Email parameter is required";

/// Webhook body missing the user email or product ID
pub const ERR_MISSING_WEBHOOK_FIELDS: &str = "Missing required fields: user_email or product_id";

/// Webhook product ID is not in the product table
pub const ERR_INVALID_PRODUCT: &str = "Invalid product ID";

/// Webhook body is not JSON or has mistyped fields
pub const ERR_INVALID_BODY: &str = "Invalid request body";

/// Generic message for any failure the client should not see details of
pub const ERR_INTERNAL: &str = "Internal server error";
