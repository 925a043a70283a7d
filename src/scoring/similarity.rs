// Lexical overlap scoring between a claim and its reference snippet.
//
// similarity = |claim tokens ∩ snippet tokens| / |claim tokens|
//
// The denominator is the claim's token count only. A long snippet that
// happens to contain every claim word scores 1.0, and a claim full of words
// the reference never mentions scores low no matter how long the reference
// is. Both texts are normalized first, so case and punctuation never matter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::claims::normalize::tokens;

/// Similarity at or above this is labeled Likely True.
pub const LIKELY_TRUE_THRESHOLD: f64 = 0.6;
/// Similarity at or above this (and below Likely True) is labeled Needs Review.
pub const NEEDS_REVIEW_THRESHOLD: f64 = 0.3;

/// Snippet markers that identify a placeholder reference rather than article text.
const UNUSABLE_MARKERS: [&str; 2] = ["No relevant", "failed"];

/// Trust label assigned to a scored claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustLabel {
    #[serde(rename = "Likely True")]
    LikelyTrue,
    #[serde(rename = "Needs Review")]
    NeedsReview,
    #[serde(rename = "Likely False")]
    LikelyFalse,
    #[serde(rename = "No Reference")]
    NoReference,
}

impl TrustLabel {
    /// Bucket a similarity ratio. Boundaries belong to the higher bucket.
    pub fn from_similarity(similarity: f64) -> Self {
        match similarity {
            s if s >= LIKELY_TRUE_THRESHOLD => TrustLabel::LikelyTrue,
            s if s >= NEEDS_REVIEW_THRESHOLD => TrustLabel::NeedsReview,
            _ => TrustLabel::LikelyFalse,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrustLabel::LikelyTrue => "Likely True",
            TrustLabel::NeedsReview => "Needs Review",
            TrustLabel::LikelyFalse => "Likely False",
            TrustLabel::NoReference => "No Reference",
        }
    }
}

impl fmt::Display for TrustLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when the snippet can't be compared against: empty, or one of the
/// fetcher's "No result" / "Error" placeholder messages.
pub fn is_unusable_snippet(snippet: &str) -> bool {
    snippet.is_empty() || UNUSABLE_MARKERS.iter().any(|m| snippet.contains(m))
}

/// Score a claim against a reference snippet.
///
/// Returns the similarity in [0, 1] and its label. Unusable snippets and
/// claims with no tokens score `(0.0, NoReference)`.
pub fn score(claim: &str, snippet: &str) -> (f64, TrustLabel) {
    if is_unusable_snippet(snippet) {
        return (0.0, TrustLabel::NoReference);
    }

    let claim_tokens = tokens(claim);
    if claim_tokens.is_empty() {
        return (0.0, TrustLabel::NoReference);
    }
    let snippet_tokens = tokens(snippet);

    let common = claim_tokens.intersection(&snippet_tokens).count();
    let similarity = common as f64 / claim_tokens.len() as f64;

    (similarity, TrustLabel::from_similarity(similarity))
}

/// Convert a similarity ratio to a 0-100 trust score with one decimal place.
///
/// The percentage is rounded as the exact binary value it holds, so the
/// score always agrees with the one-decimal percentage shown for the
/// similarity (23/80 -> 28.7, not 28.8). Exact halves go to even.
pub fn trust_score(similarity: f64) -> f64 {
    let percent = similarity * 100.0;
    format!("{percent:.1}").parse().unwrap_or(percent)
}
