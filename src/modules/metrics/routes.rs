use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;
use super::controller::{debug_vars, get_metrics};

pub fn metrics_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/metrics", get(get_metrics))
        .route("/debug/vars", get(debug_vars))
}
