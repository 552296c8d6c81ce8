use serde::Serialize;
use std::sync::{Arc, Mutex};

use super::sink::{Counter, MetricsSink};
use super::MetricsRegistry;

/// Collector for poll and hit metrics.
///
/// Backs the counters with the Prometheus registry and keeps the last
/// probe error, which has no natural Prometheus representation.
pub struct PollMetricsCollector {
    metrics: Arc<MetricsRegistry>,
    last_error: Mutex<Option<String>>,
}

/// Counter values in the shape of the `/debug/vars` export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarsSnapshot {
    pub hit_count: u64,
    pub poll_count: u64,
    pub poll_error: String,
    pub poll_error_count: u64,
}

impl PollMetricsCollector {
    pub fn new(metrics: Arc<MetricsRegistry>) -> Self {
        Self {
            metrics,
            last_error: Mutex::new(None),
        }
    }

    pub fn registry(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    pub fn last_error(&self) -> Option<String> {
        match self.last_error.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn snapshot(&self) -> VarsSnapshot {
        VarsSnapshot {
            hit_count: self.metrics.hit_total.get(),
            poll_count: self.metrics.poll_total.get(),
            poll_error: self.last_error().unwrap_or_default(),
            poll_error_count: self.metrics.poll_error_total.get(),
        }
    }
}

impl MetricsSink for PollMetricsCollector {
    fn increment(&self, counter: Counter) {
        tracing::trace!(counter = counter.as_str(), "Counter incremented");
        match counter {
            Counter::Hit => self.metrics.hit_total.inc(),
            Counter::Poll => self.metrics.poll_total.inc(),
            Counter::PollError => self.metrics.poll_error_total.inc(),
        }
    }

    fn record_error(&self, message: &str) {
        let mut guard = match self.last_error.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(message.to_string());
    }

    fn record_confirmed(&self) {
        self.metrics.confirmed.set(1);
    }
}
