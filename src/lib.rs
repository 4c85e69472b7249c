//! Plan Webhook Server Library
//!
//! Subscription webhook receiver and plan lookup API backed by a JSON file.
//! [`build_router`] is exported so an external host can mount the API
//! without this crate binding its own listener.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use db::{open_store, JsonStore, Store};
pub use error::{AppError, Result, WebhookError};

use axum::{
    routing::{get, post},
    Router,
};

use routes::{get_user_plan, health_check, receive_webhook};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: Store, config: Config) -> Self {
        Self { store, config }
    }
}

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/user-plan", get(get_user_plan))
        .route("/api/webhook", post(receive_webhook))
        .with_state(state)
}
