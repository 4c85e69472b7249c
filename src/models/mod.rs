pub mod plan;
pub mod subscription;

pub use plan::Plan;
pub use subscription::{stored_plan, SubscriptionRecord, Subscriptions};
