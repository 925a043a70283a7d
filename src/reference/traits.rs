// Reference source trait: the swap-ready seam in front of the encyclopedia.
//
// Any service that can turn a query into ranked article titles and a title
// into a short plain-text summary can back the pipeline.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Title used when a search comes back empty.
pub const NO_RESULT_TITLE: &str = "No result";
/// Snippet used when a search comes back empty.
pub const NO_RESULT_SNIPPET: &str = "No relevant Wikipedia article found.";
/// Title used when a search or summary request fails.
pub const ERROR_TITLE: &str = "Error";

/// The reference material retrieved for one claim.
///
/// The snippet is kept whole. Scoring must see the full text; only display
/// code truncates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub snippet: String,
}

impl Reference {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
        }
    }

    /// The reference recorded when the search found no candidate articles.
    pub fn no_result() -> Self {
        Self::new(NO_RESULT_TITLE, NO_RESULT_SNIPPET)
    }

    /// The reference recorded when retrieval failed.
    pub fn error(err: &FetchError) -> Self {
        Self::new(ERROR_TITLE, format!("Wikipedia fetch failed: {err}"))
    }

    /// True for the "No result" and "Error" placeholders.
    pub fn is_sentinel(&self) -> bool {
        self.title == NO_RESULT_TITLE || self.title == ERROR_TITLE
    }
}

/// Trait for looking up reference material. Implementations are async
/// because the real provider is an HTTP API.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Search for articles matching `query`, best match first.
    async fn search(&self, query: &str) -> Result<Vec<String>, FetchError>;

    /// Fetch a plain-text summary of `title`, limited to `sentences` sentences.
    async fn summary(&self, title: &str, sentences: u8) -> Result<String, FetchError>;
}
