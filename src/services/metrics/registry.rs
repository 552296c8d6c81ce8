use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Central metrics registry for the outyet server
pub struct MetricsRegistry {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: IntCounterVec,
    pub http_request_duration_seconds: HistogramVec,

    // Poll Metrics
    pub hit_total: IntCounter,
    pub poll_total: IntCounter,
    pub poll_error_total: IntCounter,
    pub confirmed: IntGauge,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, MetricsError> {
        let registry = Registry::new();

        // HTTP Metrics
        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests").namespace("outyet"),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .namespace("outyet")
                .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        // Poll Metrics
        let hit_total = IntCounter::with_opts(
            Opts::new("hit_total", "Status page hits").namespace("outyet"),
        )?;
        registry.register(Box::new(hit_total.clone()))?;

        let poll_total = IntCounter::with_opts(
            Opts::new("poll_total", "Probe attempts against the change URL").namespace("outyet"),
        )?;
        registry.register(Box::new(poll_total.clone()))?;

        let poll_error_total = IntCounter::with_opts(
            Opts::new("poll_error_total", "Probe attempts that failed to complete")
                .namespace("outyet"),
        )?;
        registry.register(Box::new(poll_error_total.clone()))?;

        let confirmed = IntGauge::with_opts(
            Opts::new("confirmed", "1 once the change URL has been seen").namespace("outyet"),
        )?;
        registry.register(Box::new(confirmed.clone()))?;

        Ok(Arc::new(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            hit_total,
            poll_total,
            poll_error_total,
            confirmed,
        }))
    }

    /// Export metrics in Prometheus text format
    pub fn export(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Get the underlying registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
