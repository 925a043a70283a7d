// Output formatting: display rows, terminal rendering, and JSON reports.
//
// The core never truncates anything. Everything here is presentation: the
// reference snippet is cut to REFERENCE_PREVIEW_CHARS and ratios become
// percentage strings.

pub mod terminal;

use serde::Serialize;

use crate::pipeline::analyze::{AnalysisResult, LabelCounts, ScoredClaim};

/// Reference snippets longer than this are truncated for display.
pub const REFERENCE_PREVIEW_CHARS: usize = 200;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..200]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Format a 0-1 ratio as a percentage with one decimal, e.g. `0.6667` -> `"66.7%"`.
pub fn format_ratio(ratio: f64) -> String {
    format_percent(ratio * 100.0)
}

/// Format a 0-100 value as a percentage with one decimal, e.g. `66.7` -> `"66.7%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// One row of the result table, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub position: usize,
    pub claim: String,
    pub source: String,
    pub reference: String,
    pub similarity: String,
    pub trust_score: String,
    pub status: String,
}

impl From<&ScoredClaim> for ResultRow {
    fn from(scored: &ScoredClaim) -> Self {
        Self {
            position: scored.position,
            claim: scored.claim.clone(),
            source: scored.reference.title.clone(),
            reference: truncate_chars(&scored.reference.snippet, REFERENCE_PREVIEW_CHARS),
            similarity: format_ratio(scored.similarity),
            trust_score: format_percent(scored.trust_score),
            status: scored.label.to_string(),
        }
    }
}

/// Machine-readable report: the full result plus its derived summary.
///
/// Snippets are included untruncated.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub aggregate_trust: f64,
    pub counts: LabelCounts,
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            aggregate_trust: result.aggregate_trust(),
            counts: result.label_counts(),
            result,
        }
    }
}
