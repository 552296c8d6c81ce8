use outyet::services::metrics::{Counter, MetricsRegistry, MetricsSink, PollMetricsCollector};

// =============================================================================
// INTEGRATION TESTS - METRICS REGISTRY
// =============================================================================

#[test]
fn test_metrics_registry_initialization() {
    let metrics = MetricsRegistry::new();
    assert!(metrics.is_ok(), "Failed to initialize metrics registry");
}

#[test]
fn test_registries_are_independent() {
    let first = MetricsRegistry::new().unwrap();
    let second = MetricsRegistry::new().unwrap();

    first.poll_total.inc();

    assert_eq!(first.poll_total.get(), 1);
    assert_eq!(second.poll_total.get(), 0);
}

#[test]
fn test_http_metrics_recording() {
    let metrics = MetricsRegistry::new().unwrap();

    metrics
        .http_requests_total
        .with_label_values(&["GET", "/", "200"])
        .inc();

    let output = metrics.export().unwrap();
    assert!(output.contains("outyet_http_requests_total"));
    assert!(output.contains("method=\"GET\""));
    assert!(output.contains("endpoint=\"/\""));
    assert!(output.contains("status=\"200\""));
}

#[test]
fn test_collector_feeds_registry() {
    let metrics = MetricsRegistry::new().unwrap();
    let collector = PollMetricsCollector::new(metrics.clone());

    collector.increment(Counter::Hit);
    collector.increment(Counter::Poll);
    collector.increment(Counter::Poll);
    collector.increment(Counter::PollError);
    collector.record_error("connection refused");

    let output = metrics.export().unwrap();
    assert!(output.contains("outyet_hit_total 1"));
    assert!(output.contains("outyet_poll_total 2"));
    assert!(output.contains("outyet_poll_error_total 1"));
    assert!(output.contains("outyet_confirmed 0"));

    let vars = collector.snapshot();
    assert_eq!(vars.poll_error, "connection refused");
    assert_eq!(vars.poll_error_count, 1);
}

#[test]
fn test_confirmed_gauge() {
    let metrics = MetricsRegistry::new().unwrap();
    let collector = PollMetricsCollector::new(metrics.clone());

    collector.record_confirmed();

    assert_eq!(metrics.confirmed.get(), 1);
    assert!(metrics.export().unwrap().contains("outyet_confirmed 1"));
}

#[test]
fn test_counter_names() {
    assert_eq!(Counter::Hit.as_str(), "hit");
    assert_eq!(Counter::Poll.as_str(), "poll");
    assert_eq!(Counter::PollError.as_str(), "poll_error");
}
