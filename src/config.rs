use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default MediaWiki Action API endpoint (English Wikipedia).
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Default user agent. Wikimedia asks API clients to identify themselves.
pub const DEFAULT_USER_AGENT: &str = "trustguard/0.1 (claim-verification)";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUESTS_PER_SECOND: f64 = 5.0;

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret and everything has a default, so `load()` only
/// fails when a variable is set to something unparseable. The .env file is
/// loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// MediaWiki API endpoint used for search and summaries
    pub wikipedia_api_url: String,
    /// Per-request timeout. Expiry is reported like any other fetch failure.
    pub timeout: Duration,
    /// Upper bound on requests sent to the reference service
    pub requests_per_second: f64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wikipedia_api_url: DEFAULT_WIKIPEDIA_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unset and blank variables fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let timeout_secs: u64 = parse_var(get("TRUSTGUARD_TIMEOUT_SECS"), "TRUSTGUARD_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            anyhow::bail!("TRUSTGUARD_TIMEOUT_SECS must be at least 1 second");
        }

        let requests_per_second: f64 = parse_var(
            get("TRUSTGUARD_REQUESTS_PER_SECOND"),
            "TRUSTGUARD_REQUESTS_PER_SECOND",
        )?
        .unwrap_or(DEFAULT_REQUESTS_PER_SECOND);
        if !requests_per_second.is_finite() || requests_per_second <= 0.0 {
            anyhow::bail!(
                "TRUSTGUARD_REQUESTS_PER_SECOND must be a positive number, got {requests_per_second}"
            );
        }

        Ok(Self {
            wikipedia_api_url: get("WIKIPEDIA_API_URL").unwrap_or(defaults.wikipedia_api_url),
            timeout: Duration::from_secs(timeout_secs),
            requests_per_second,
            user_agent: get("TRUSTGUARD_USER_AGENT").unwrap_or(defaults.user_agent),
        })
    }
}

fn parse_var<T>(raw: Option<String>, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.map(|value| {
        value
            .trim()
            .parse::<T>()
            .with_context(|| format!("{name} is not a valid number: {value:?}"))
    })
    .transpose()
}
