pub mod health;
pub mod user_plan;
pub mod webhook;

pub use health::health_check;
pub use user_plan::get_user_plan;
pub use webhook::receive_webhook;
