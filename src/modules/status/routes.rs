use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;
use super::controller;

pub fn status_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(controller::status_page))
        .route("/health", get(controller::health_check))
}
