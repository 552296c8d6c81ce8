use std::time::Duration;

/// Shortest interval the loop will sleep between probes
pub const MIN_POLL_PERIOD: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PollError {
    #[error("Poll target URL must not be empty")]
    EmptyUrl,
}

/// What to poll and how often. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTarget {
    url: String,
    period: Duration,
}

impl PollTarget {
    /// Periods shorter than [`MIN_POLL_PERIOD`] are raised to it.
    pub fn new(url: impl Into<String>, period: Duration) -> Result<Self, PollError> {
        let url = url.into().trim().to_string();
        if url.is_empty() {
            return Err(PollError::EmptyUrl);
        }

        Ok(Self {
            url,
            period: period.max(MIN_POLL_PERIOD),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Effective period, after clamping
    pub fn period(&self) -> Duration {
        self.period
    }
}
