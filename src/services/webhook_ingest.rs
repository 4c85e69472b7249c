use chrono::Utc;

use crate::db::JsonStore;
use crate::error::{AppError, Result};
use crate::models::{Plan, SubscriptionRecord};

/// Subscription change reported by the payment provider
#[derive(Debug, Clone)]
pub struct IngestEvent {
    pub email: String,
    pub product_id: String,
    /// Subscription time (Unix seconds). Defaults to now.
    pub timestamp: Option<i64>,
}

/// Result of a successful ingest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    pub email: String,
    pub plan: Plan,
}

/// Record a subscription event.
///
/// Resolves the plan from the product ID and overwrites the email's record
/// with it. Other records are written back exactly as read. Input is
/// validated before the store is touched.
pub async fn ingest(store: &JsonStore, event: IngestEvent) -> Result<IngestOutcome> {
    if event.email.is_empty() || event.product_id.is_empty() {
        return Err(AppError::MissingWebhookFields);
    }

    let plan = Plan::from_product_id(&event.product_id).ok_or_else(|| {
        tracing::warn!("Unknown product ID in webhook: {}", event.product_id);
        AppError::InvalidProduct
    })?;

    let subscribed_at = event.timestamp.unwrap_or_else(|| Utc::now().timestamp());

    let mut subscriptions = store.read().await;
    subscriptions.insert(
        event.email.clone(),
        SubscriptionRecord::new(plan, subscribed_at).to_value()?,
    );
    store.write(&subscriptions).await?;

    tracing::info!("Subscription updated: {} -> {}", event.email, plan);

    Ok(IngestOutcome {
        email: event.email,
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{open_store, Store};
    use crate::services::get_plan;
    use serde_json::json;
    use tempfile::TempDir;

    const STARTER_PRODUCT: &str = "prod_4MFFcp902Sp1aXMWsBSuRG";
    const PRO_PRODUCT: &str = "prod_4Tezu3Ozv3ETbXMolp2dYr";

    fn event(email: &str, product_id: &str, timestamp: Option<i64>) -> IngestEvent {
        IngestEvent {
            email: email.to_string(),
            product_id: product_id.to_string(),
            timestamp,
        }
    }

    fn test_store(temp_dir: &TempDir) -> Store {
        open_store(temp_dir.path().join("db.json")).unwrap()
    }

    #[tokio::test]
    async fn test_ingest_then_lookup() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let outcome = ingest(&store, event("a@x.com", STARTER_PRODUCT, None))
            .await
            .unwrap();
        assert_eq!(outcome.email, "a@x.com");
        assert_eq!(outcome.plan, Plan::Starter);

        let lookup = get_plan(&store, "a@x.com").await.unwrap();
        assert_eq!(lookup.plan, "starter");
    }

    #[tokio::test]
    async fn test_explicit_timestamp_is_stored() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        ingest(&store, event("a@x.com", PRO_PRODUCT, Some(1700000000)))
            .await
            .unwrap();

        let record = store.read().await.remove("a@x.com").unwrap();
        assert_eq!(record, json!({ "userPlan": "pro", "subscribedAt": 1700000000 }));
    }

    #[tokio::test]
    async fn test_missing_timestamp_defaults_to_now() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let before = Utc::now().timestamp();
        ingest(&store, event("a@x.com", PRO_PRODUCT, None))
            .await
            .unwrap();
        let after = Utc::now().timestamp();

        let record = store.read().await.remove("a@x.com").unwrap();
        let subscribed_at = record["subscribedAt"].as_i64().unwrap();
        assert!(subscribed_at >= before && subscribed_at <= after);
    }

    #[tokio::test]
    async fn test_repeated_ingest_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        ingest(&store, event("a@x.com", STARTER_PRODUCT, Some(42)))
            .await
            .unwrap();
        let first = store.read().await;
        ingest(&store, event("a@x.com", STARTER_PRODUCT, Some(42)))
            .await
            .unwrap();

        assert_eq!(store.read().await, first);
    }

    #[tokio::test]
    async fn test_ingest_overwrites_and_keeps_other_emails() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        ingest(&store, event("a@x.com", STARTER_PRODUCT, Some(1)))
            .await
            .unwrap();
        ingest(&store, event("b@x.com", STARTER_PRODUCT, Some(2)))
            .await
            .unwrap();
        ingest(&store, event("a@x.com", PRO_PRODUCT, Some(3)))
            .await
            .unwrap();

        let subscriptions = store.read().await;
        assert_eq!(subscriptions.len(), 2);
        assert_eq!(
            subscriptions["a@x.com"],
            json!({ "userPlan": "pro", "subscribedAt": 3 })
        );
        assert_eq!(
            subscriptions["b@x.com"],
            json!({ "userPlan": "starter", "subscribedAt": 2 })
        );
    }

    #[tokio::test]
    async fn test_invalid_input_leaves_store_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let result = ingest(&store, event("", STARTER_PRODUCT, None)).await;
        assert!(matches!(result, Err(AppError::MissingWebhookFields)));

        let result = ingest(&store, event("a@x.com", "", None)).await;
        assert!(matches!(result, Err(AppError::MissingWebhookFields)));

        let result = ingest(&store, event("a@x.com", "prod_unknown", None)).await;
        assert!(matches!(result, Err(AppError::InvalidProduct)));

        assert!(!store.exists().await);
    }

    #[tokio::test]
    async fn test_corrupt_store_is_replaced() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        std::fs::write(store.path(), "garbage").unwrap();

        ingest(&store, event("a@x.com", STARTER_PRODUCT, Some(7)))
            .await
            .unwrap();

        let subscriptions = store.read().await;
        assert_eq!(subscriptions.len(), 1);
        assert_eq!(subscriptions["a@x.com"]["userPlan"], "starter");
    }

    #[tokio::test]
    async fn test_ingest_preserves_loose_records() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        std::fs::write(
            store.path(),
            r#"{"a@x.com":{"userPlan":"pro","subscribedAt":1},"b@x.com":{"userPlan":"plus","subscribedAt":"1700000000","source":"manual"}}"#,
        )
        .unwrap();

        ingest(&store, event("c@x.com", STARTER_PRODUCT, Some(5)))
            .await
            .unwrap();

        let subscriptions = store.read().await;
        assert_eq!(subscriptions.len(), 3);
        assert_eq!(
            subscriptions["a@x.com"],
            json!({ "userPlan": "pro", "subscribedAt": 1 })
        );
        assert_eq!(
            subscriptions["b@x.com"],
            json!({ "userPlan": "plus", "subscribedAt": "1700000000", "source": "manual" })
        );
        assert_eq!(
            subscriptions["c@x.com"],
            json!({ "userPlan": "starter", "subscribedAt": 5 })
        );

        assert_eq!(get_plan(&store, "a@x.com").await.unwrap().plan, "pro");
    }
}
