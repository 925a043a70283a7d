// Error types for the verification pipeline.
//
// Only two things can go wrong at the library boundary: the input is unusable
// (AnalysisError) or a single reference lookup fails (FetchError). Fetch
// errors never leave the reference module as errors. The fetcher turns them
// into sentinel references so one bad lookup can't sink a whole batch.

/// Input validation failures. These stop an analysis before any lookup runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Please paste AI-generated text first!")]
    EmptyInput,

    #[error("No valid claims found. Use complete sentences.")]
    NoClaims,

    #[error("Reference length must be between 1 and 4 sentences, got {0}")]
    InvalidSentenceCount(u8),
}

/// Failures while talking to the reference service.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure, including timeouts.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("no page named \"{title}\"")]
    MissingPage { title: String },

    #[error("\"{title}\" may refer to several articles")]
    Disambiguation { title: String },

    #[error("\"{title}\" has no summary text")]
    EmptySummary { title: String },
}
