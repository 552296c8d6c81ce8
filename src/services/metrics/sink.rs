/// Process counters reported by the poller and the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    /// Status page served
    Hit,
    /// Probe attempted
    Poll,
    /// Probe failed at the transport level
    PollError,
}

impl Counter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Poll => "poll",
            Self::PollError => "poll_error",
        }
    }
}

/// Receiver for poller observability.
///
/// Counters only ever grow. Implementations must be cheap to call from
/// the polling loop and from request handlers at the same time.
pub trait MetricsSink: Send + Sync {
    fn increment(&self, counter: Counter);

    /// Remember the most recent probe error message
    fn record_error(&self, message: &str);

    /// Called once, when the awaited condition is observed
    fn record_confirmed(&self) {}
}

/// Sink that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn increment(&self, _counter: Counter) {}

    fn record_error(&self, _message: &str) {}
}
