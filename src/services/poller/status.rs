use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::prober::Prober;
use super::sleeper::{Sleeper, TokioSleeper};
use super::target::PollTarget;
use crate::services::metrics::{Counter, MetricsSink, NoopMetrics};

/// Invoked once, right after the state flips to confirmed
pub type CompletionHook = Box<dyn FnOnce() + Send + 'static>;

/// Read side of the poll state. Cheap to clone into request handlers.
///
/// The state starts pending and becomes confirmed at most once. It never
/// goes back.
#[derive(Debug, Clone)]
pub struct PollingStatus {
    target: Arc<PollTarget>,
    confirmed: Arc<AtomicBool>,
}

impl PollingStatus {
    fn new(target: PollTarget) -> Self {
        Self {
            target: Arc::new(target),
            confirmed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed.load(Ordering::Acquire)
    }

    pub fn target(&self) -> &PollTarget {
        &self.target
    }

    fn confirm(&self) {
        self.confirmed.store(true, Ordering::Release);
    }
}

/// Owns the write side of a [`PollingStatus`] and the loop driving it
pub struct Poller {
    status: PollingStatus,
    prober: Arc<dyn Prober>,
    sleeper: Arc<dyn Sleeper>,
    metrics: Arc<dyn MetricsSink>,
    on_confirmed: Option<CompletionHook>,
}

impl Poller {
    pub fn new(target: PollTarget, prober: Arc<dyn Prober>) -> Self {
        Self {
            status: PollingStatus::new(target),
            prober,
            sleeper: Arc::new(TokioSleeper),
            metrics: Arc::new(NoopMetrics),
            on_confirmed: None,
        }
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsSink>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn on_confirmed(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_confirmed = Some(Box::new(hook));
        self
    }

    pub fn status(&self) -> PollingStatus {
        self.status.clone()
    }

    /// Spawn the loop on the current tokio runtime.
    ///
    /// Consumes the poller, so a given state can only ever have one loop.
    pub fn start(self) -> PollHandle {
        let status = self.status.clone();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(self.run(cancel.clone()));

        PollHandle {
            status,
            cancel,
            task,
        }
    }

    /// Probe until the target is seen or `cancel` fires
    pub async fn run(self, cancel: CancellationToken) {
        let Poller {
            status,
            prober,
            sleeper,
            metrics,
            mut on_confirmed,
        } = self;
        let url = status.target().url().to_string();
        let period = status.target().period();
        let mut attempt: u64 = 0;

        tracing::info!(url = %url, period = ?period, "Polling started");

        loop {
            if cancel.is_cancelled() {
                tracing::info!(url = %url, attempt, "Polling cancelled");
                return;
            }

            attempt += 1;
            metrics.increment(Counter::Poll);

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::info!(url = %url, attempt, "Polling cancelled during probe");
                    return;
                }
                outcome = prober.probe(&url) => outcome,
            };

            if let Some(detail) = &outcome.error_detail {
                tracing::warn!(url = %url, attempt, error = %detail, "Probe failed");
                metrics.increment(Counter::PollError);
                metrics.record_error(detail);
            }

            if outcome.success {
                status.confirm();
                metrics.record_confirmed();
                tracing::info!(url = %url, attempt, "Change URL confirmed");

                if let Some(hook) = on_confirmed.take() {
                    hook();
                }
                return;
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::info!(url = %url, attempt, "Polling cancelled while sleeping");
                    return;
                }
                _ = sleeper.sleep(period) => {}
            }
        }
    }
}

/// Handle to a running poll loop
pub struct PollHandle {
    status: PollingStatus,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn status(&self) -> PollingStatus {
        self.status.clone()
    }

    /// Stop the loop at its next suspension point. The state is left as is.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the loop to end
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "Poll task ended abnormally");
        }
    }
}
