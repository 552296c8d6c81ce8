use outyet::config::Config;
use outyet::services::metrics::{MetricsRegistry, PollMetricsCollector};
use outyet::services::poller::{HttpProber, PollTarget, Poller};
use outyet::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "outyet=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            std::process::exit(2);
        }
    };

    let target = PollTarget::new(config.change_url.clone(), config.poll_period)
        .expect("Change URL validated by configuration");

    let registry = MetricsRegistry::new().expect("Failed to initialize metrics registry");
    let metrics = Arc::new(PollMetricsCollector::new(registry));

    let poller = Poller::new(target, Arc::new(HttpProber::new(config.probe_timeout)))
        .with_metrics(metrics.clone());
    let handle = poller.start();

    let state = AppState::new(handle.status(), metrics, config.version.clone())
        .expect("Failed to compile status template");
    let app = outyet::create_app(state);

    let listener = tokio::net::TcpListener::bind(config.http_addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(
        addr = %config.http_addr,
        version = %config.version,
        url = %config.change_url,
        "Server running"
    );

    let shutdown = async {
        tokio::signal::ctrl_c().await.ok();
        tracing::info!("Shutting down");
    };

    if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown).await {
        tracing::error!(error = %e, "Server error");
    }

    handle.cancel();
    handle.join().await;
}
