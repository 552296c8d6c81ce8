use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::modules::status::schema::{HealthResponse, StatusView};
use crate::services::metrics::{Counter, MetricsSink};
use crate::AppState;

pub const STATUS_TEMPLATE: &str = "status.html";

pub const STATUS_TEMPLATE_SOURCE: &str = r#"<!DOCTYPE html><html><body><center>
	<h2>Is Go {{ version }} out yet?</h2>
	<h1>
	{% if yes %}
		<a href="{{ url }}">YES!</a>
	{% else %}
		No. :-(
	{% endif %}
	</h1>
</center></body></html>
"#;

/// Handler for GET /
/// Renders whether the change URL has been seen yet
pub async fn status_page(State(state): State<Arc<AppState>>) -> Response {
    state.metrics.increment(Counter::Hit);

    let view = StatusView {
        url: state.status.target().url(),
        version: &state.version,
        yes: state.status.is_confirmed(),
    };

    let rendered = state
        .templates
        .get_template(STATUS_TEMPLATE)
        .and_then(|tmpl| tmpl.render(&view));

    match rendered {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render status page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render status page").into_response()
        }
    }
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        confirmed: state.status.is_confirmed(),
    })
}
