pub mod config;
pub mod modules;
pub mod services;

use axum::{middleware, Router};
use minijinja::Environment;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use modules::metrics::metrics_routes;
use modules::status::controller::{STATUS_TEMPLATE, STATUS_TEMPLATE_SOURCE};
use modules::status::status_routes;
use services::metrics::{metrics_middleware, PollMetricsCollector};
use services::poller::PollingStatus;

pub struct AppState {
    pub status: PollingStatus,
    pub metrics: Arc<PollMetricsCollector>,
    pub version: String,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(
        status: PollingStatus,
        metrics: Arc<PollMetricsCollector>,
        version: impl Into<String>,
    ) -> Result<Self, minijinja::Error> {
        let mut templates = Environment::new();
        templates.add_template(STATUS_TEMPLATE, STATUS_TEMPLATE_SOURCE)?;

        Ok(Self {
            status,
            metrics,
            version: version.into(),
            templates,
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    let registry = state.metrics.registry().clone();
    let state = Arc::new(state);

    Router::new()
        .merge(status_routes())
        .merge(metrics_routes())
        .layer(middleware::from_fn_with_state(registry, metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
