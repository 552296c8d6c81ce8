use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Result of one existence check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub success: bool,
    /// Set only when the request could not complete
    pub error_detail: Option<String>,
}

impl ProbeOutcome {
    /// The remote answered 200 OK
    pub fn confirmed() -> Self {
        Self {
            success: true,
            error_detail: None,
        }
    }

    /// The remote answered, but not with 200 OK
    pub fn absent() -> Self {
        Self {
            success: false,
            error_detail: None,
        }
    }

    /// The request did not complete
    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            error_detail: Some(detail.into()),
        }
    }
}

/// A single-attempt existence check against a URL
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Prober issuing one HTTP HEAD request per call
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .user_agent(concat!("outyet/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for HttpProber {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(response) if response.status() == StatusCode::OK => ProbeOutcome::confirmed(),
            Ok(response) => {
                tracing::debug!(url, status = %response.status(), "Change URL not present yet");
                ProbeOutcome::absent()
            }
            Err(e) => ProbeOutcome::failed(e.to_string()),
        }
    }
}
