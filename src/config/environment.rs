use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Base of the change URL; the tag name `go<version>` is appended
pub const CHANGE_URL_BASE: &str = "https://go.googlesource.com/go/+/";

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POLL_PERIOD: Duration = Duration::from_secs(5);
const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_VERSION: &str = "1.9.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid listen address: {source}")]
    InvalidAddr {
        var: &'static str,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{var} is not a valid duration: {source}")]
    InvalidDuration {
        var: &'static str,
        #[source]
        source: humantime::DurationError,
    },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub http_addr: SocketAddr,
    pub poll_period: Duration,
    pub probe_timeout: Duration,
    pub version: String,
    pub change_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_addr = lookup("OUTYET_HTTP_ADDR")
            .unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string())
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                var: "OUTYET_HTTP_ADDR",
                source,
            })?;

        let poll_period = parse_duration(&lookup, "OUTYET_POLL_PERIOD", DEFAULT_POLL_PERIOD)?;
        let probe_timeout =
            parse_duration(&lookup, "OUTYET_PROBE_TIMEOUT", DEFAULT_PROBE_TIMEOUT)?;

        let version = lookup("OUTYET_VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string());
        if version.trim().is_empty() {
            return Err(ConfigError::Empty("OUTYET_VERSION"));
        }

        let change_url = match lookup("OUTYET_URL") {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::Empty("OUTYET_URL")),
            Some(url) => url,
            None => change_url_for(&version),
        };

        Ok(Self {
            http_addr,
            poll_period,
            probe_timeout,
            version,
            change_url,
        })
    }
}

/// URL of the release tag for `version`
pub fn change_url_for(version: &str) -> String {
    format!("{}go{}", CHANGE_URL_BASE, version)
}

fn parse_duration<F>(lookup: &F, var: &'static str, default: Duration) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => humantime::parse_duration(raw.trim())
            .map_err(|source| ConfigError::InvalidDuration { var, source }),
        None => Ok(default),
    }
}
