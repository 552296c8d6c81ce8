use async_trait::async_trait;
use outyet::services::metrics::{Counter, MetricsSink};
use outyet::services::poller::{PollingStatus, ProbeOutcome, Prober, Sleeper};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Prober replaying a fixed script, then repeating `fallback`
#[allow(dead_code)]
pub struct ScriptedProber {
    script: Mutex<VecDeque<ProbeOutcome>>,
    fallback: ProbeOutcome,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl ScriptedProber {
    pub fn new(script: Vec<ProbeOutcome>, fallback: ProbeOutcome) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    /// Absent `failures` times, then confirmed
    pub fn succeed_after(failures: usize) -> Self {
        Self::new(
            vec![ProbeOutcome::absent(); failures],
            ProbeOutcome::confirmed(),
        )
    }

    pub fn always(outcome: ProbeOutcome) -> Self {
        Self::new(Vec::new(), outcome)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, _url: &str) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}

/// Sleeper that returns immediately, remembering each period and the
/// state observed when it was called
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSleeper {
    periods: Mutex<Vec<Duration>>,
    observed: Mutex<Vec<bool>>,
    watch: Mutex<Option<PollingStatus>>,
    cancel_after: Mutex<Option<(usize, CancellationToken)>>,
}

#[allow(dead_code)]
impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observing(status: PollingStatus) -> Self {
        let sleeper = Self::default();
        *sleeper.watch.lock().unwrap() = Some(status);
        sleeper
    }

    /// Cancel `token` once `sleeps` sleeps have been recorded
    pub fn cancelling_after(sleeps: usize, token: CancellationToken) -> Self {
        let sleeper = Self::default();
        *sleeper.cancel_after.lock().unwrap() = Some((sleeps, token));
        sleeper
    }

    pub fn periods(&self) -> Vec<Duration> {
        self.periods.lock().unwrap().clone()
    }

    pub fn observed(&self) -> Vec<bool> {
        self.observed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, period: Duration) {
        let count = {
            let mut periods = self.periods.lock().unwrap();
            periods.push(period);
            periods.len()
        };

        if let Some(status) = self.watch.lock().unwrap().as_ref() {
            self.observed.lock().unwrap().push(status.is_confirmed());
        }

        if let Some((limit, token)) = self.cancel_after.lock().unwrap().as_ref() {
            if count >= *limit {
                token.cancel();
            }
        }

        tokio::task::yield_now().await;
    }
}

/// Sink keeping every call in memory
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingMetrics {
    counts: Mutex<HashMap<Counter, u64>>,
    errors: Mutex<Vec<String>>,
    confirmed: AtomicUsize,
}

#[allow(dead_code)]
impl RecordingMetrics {
    pub fn count(&self, counter: Counter) -> u64 {
        self.counts
            .lock()
            .unwrap()
            .get(&counter)
            .copied()
            .unwrap_or(0)
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn confirmations(&self) -> usize {
        self.confirmed.load(Ordering::SeqCst)
    }
}

impl MetricsSink for RecordingMetrics {
    fn increment(&self, counter: Counter) {
        *self.counts.lock().unwrap().entry(counter).or_insert(0) += 1;
    }

    fn record_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn record_confirmed(&self) {
        self.confirmed.fetch_add(1, Ordering::SeqCst);
    }
}
