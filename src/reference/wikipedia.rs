// Wikipedia client: search and plain-text summaries over the MediaWiki API.
//
// Two read-only calls against the Action API:
//   list=search          query string -> ranked article titles
//   prop=extracts        title -> first N sentences of the article, plain text
//
// Redirects are followed server-side. Missing pages and disambiguation pages
// come back as errors so the fetcher can record them as failed lookups.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::rate_limiter::RateLimiter;
use super::traits::ReferenceSource;
use crate::config::Config;
use crate::error::FetchError;

/// How many search hits to request. Only the first is used, but asking for a
/// handful matches what interactive search returns.
const SEARCH_LIMIT: &str = "10";

/// HTTP client for the MediaWiki Action API.
pub struct WikipediaClient {
    client: reqwest::Client,
    api_url: String,
    rate_limiter: RateLimiter,
}

impl WikipediaClient {
    /// Create a client for the given API endpoint.
    ///
    /// `timeout` bounds every request. A request that runs past it fails
    /// with `FetchError::Http` like any other transport error.
    pub fn new(
        api_url: &str,
        user_agent: &str,
        timeout: Duration,
        rate_limiter: RateLimiter,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        debug!(
            api_url = api_url,
            timeout_ms = timeout.as_millis() as u64,
            min_interval_ms = rate_limiter.interval().as_millis() as u64,
            "Wikipedia client ready"
        );

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            &config.wikipedia_api_url,
            &config.user_agent,
            config.timeout,
            RateLimiter::per_second(config.requests_per_second),
        )
    }

    /// GET the API endpoint with the given query parameters and decode the JSON body.
    async fn api_get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, FetchError> {
        self.rate_limiter.acquire().await;

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ReferenceSource for WikipediaClient {
    async fn search(&self, query: &str) -> Result<Vec<String>, FetchError> {
        debug!(query = query, "Wikipedia search");
        let response: SearchResponse = self
            .api_get(&[
                ("action", "query"),
                ("list", "search"),
                ("srprop", ""),
                ("srlimit", SEARCH_LIMIT),
                ("srsearch", query),
            ])
            .await?;
        search_titles(response)
    }

    async fn summary(&self, title: &str, sentences: u8) -> Result<String, FetchError> {
        debug!(title = title, sentences = sentences, "Wikipedia summary");
        let sentences = sentences.to_string();
        let response: ExtractsResponse = self
            .api_get(&[
                ("action", "query"),
                ("prop", "extracts|pageprops"),
                ("explaintext", "1"),
                ("exsentences", sentences.as_str()),
                ("ppprop", "disambiguation"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await?;
        summary_text(title, response)
    }
}

/// Pull the ranked titles out of a search response.
pub fn search_titles(response: SearchResponse) -> Result<Vec<String>, FetchError> {
    if let Some(err) = response.error {
        return Err(err.into());
    }
    Ok(response
        .query
        .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
        .unwrap_or_default())
}

/// Pull the summary text for `title` out of an extracts response.
pub fn summary_text(title: &str, response: ExtractsResponse) -> Result<String, FetchError> {
    if let Some(err) = response.error {
        return Err(err.into());
    }

    let page = response
        .query
        .and_then(|q| q.pages.into_iter().next())
        .ok_or_else(|| FetchError::Decode(format!("no page returned for \"{title}\"")))?;

    if page.missing || page.invalid {
        return Err(FetchError::MissingPage { title: page.title });
    }
    if page.pageprops.contains_key("disambiguation") {
        return Err(FetchError::Disambiguation { title: page.title });
    }

    let extract = page.extract.unwrap_or_default();
    let extract = extract.trim();
    if extract.is_empty() {
        return Err(FetchError::EmptySummary { title: page.title });
    }
    Ok(extract.to_string())
}

// --- MediaWiki API response types (formatversion=2) ---

/// Error envelope returned instead of `query` when a request is rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

impl From<ApiError> for FetchError {
    fn from(err: ApiError) -> Self {
        FetchError::Api {
            code: err.code,
            info: err.info,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub query: Option<SearchQuery>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractsResponse {
    pub query: Option<ExtractsQuery>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractsQuery {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    pub extract: Option<String>,
    #[serde(default)]
    pub pageprops: HashMap<String, serde_json::Value>,
}
