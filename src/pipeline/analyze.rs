// Claim verification pipeline: segment -> fetch -> score, one claim at a time.
//
// Input validation is the only thing that can stop an analysis, and it runs
// before any network call. Once claims are extracted every one of them gets
// exactly one ScoredClaim, in the order it appeared in the text. A failed
// lookup degrades into a "No Reference" row instead of aborting the batch.

use chrono::{DateTime, Utc};
use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{debug, info};

use crate::claims::segment::{is_blank, segment};
use crate::error::AnalysisError;
use crate::reference::fetcher;
use crate::reference::traits::{Reference, ReferenceSource};
use crate::scoring::similarity::{score, trust_score, TrustLabel};

/// Fewest summary sentences a caller may request.
pub const MIN_SENTENCES: u8 = 1;
/// Most summary sentences a caller may request.
pub const MAX_SENTENCES: u8 = 4;
pub const DEFAULT_SENTENCES: u8 = 2;

/// One claim with its reference and score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredClaim {
    /// 1-based position of the claim in the analyzed text
    pub position: usize,
    pub claim: String,
    pub reference: Reference,
    /// Fraction of the claim's unique words found in the reference, 0.0 to 1.0
    pub similarity: f64,
    pub label: TrustLabel,
    /// `similarity` as a percentage rounded to one decimal
    pub trust_score: f64,
}

impl ScoredClaim {
    /// Score `claim` against an already-fetched reference.
    pub fn new(position: usize, claim: impl Into<String>, reference: Reference) -> Self {
        let claim = claim.into();
        let (similarity, label) = score(&claim, &reference.snippet);
        Self {
            position,
            claim,
            reference,
            similarity,
            label,
            trust_score: trust_score(similarity),
        }
    }
}

/// How many rows landed in each bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub likely_true: usize,
    pub needs_review: usize,
    pub likely_false: usize,
    pub no_reference: usize,
}

/// The outcome of one analysis run. Built fresh each time, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    claims: Vec<ScoredClaim>,
    max_sentences: u8,
    analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn claims(&self) -> &[ScoredClaim] {
        &self.claims
    }

    pub fn max_sentences(&self) -> u8 {
        self.max_sentences
    }

    pub fn analyzed_at(&self) -> DateTime<Utc> {
        self.analyzed_at
    }

    /// Mean trust score across all claims. A result always holds at least
    /// one claim, so this is never a division by zero.
    pub fn aggregate_trust(&self) -> f64 {
        let total: f64 = self.claims.iter().map(|c| c.trust_score).sum();
        total / self.claims.len() as f64
    }

    pub fn label_counts(&self) -> LabelCounts {
        let mut counts = LabelCounts::default();
        for claim in &self.claims {
            match claim.label {
                TrustLabel::LikelyTrue => counts.likely_true += 1,
                TrustLabel::NeedsReview => counts.needs_review += 1,
                TrustLabel::LikelyFalse => counts.likely_false += 1,
                TrustLabel::NoReference => counts.no_reference += 1,
            }
        }
        counts
    }
}

/// Fetch the reference for one claim and score it.
pub async fn check_claim(
    source: &dyn ReferenceSource,
    position: usize,
    claim: &str,
    max_sentences: u8,
) -> ScoredClaim {
    let reference = fetcher::fetch(source, claim, max_sentences).await;
    let scored = ScoredClaim::new(position, claim, reference);
    debug!(
        position = position,
        title = %scored.reference.title,
        similarity = scored.similarity,
        label = %scored.label,
        "Scored claim"
    );
    scored
}

/// Analyze a block of text.
///
/// Fails only on unusable input: blank text, a sentence count outside 1..=4,
/// or no claims long enough to check. Claims are checked sequentially; the
/// optional progress bar advances once per claim.
pub async fn analyze(
    source: &dyn ReferenceSource,
    text: &str,
    max_sentences: u8,
    progress: Option<&ProgressBar>,
) -> Result<AnalysisResult, AnalysisError> {
    if is_blank(text) {
        return Err(AnalysisError::EmptyInput);
    }
    if !(MIN_SENTENCES..=MAX_SENTENCES).contains(&max_sentences) {
        return Err(AnalysisError::InvalidSentenceCount(max_sentences));
    }

    let claims = segment(text);
    if claims.is_empty() {
        return Err(AnalysisError::NoClaims);
    }

    info!(claims = claims.len(), max_sentences = max_sentences, "Analyzing claims");
    if let Some(pb) = progress {
        pb.set_length(claims.len() as u64);
    }

    let mut scored = Vec::with_capacity(claims.len());
    for (idx, claim) in claims.iter().enumerate() {
        scored.push(check_claim(source, idx + 1, claim, max_sentences).await);
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    let result = AnalysisResult {
        claims: scored,
        max_sentences,
        analyzed_at: Utc::now(),
    };
    info!(
        claims = result.claims.len(),
        aggregate_trust = result.aggregate_trust(),
        "Analysis complete"
    );
    Ok(result)
}
