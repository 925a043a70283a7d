// Reference fetcher: claim in, Reference out, no errors.
//
// Retrieval failures are ordinary data here. Any error from the source is
// collapsed into the "Error" sentinel at this boundary, so the pipeline
// always gets one Reference per claim and keeps going.

use tracing::{debug, warn};

use super::traits::{Reference, ReferenceSource};
use crate::claims::segment::is_separator;
use crate::error::FetchError;

/// The search query is built from at most this many leading words of the claim.
pub const QUERY_WORDS: usize = 8;

/// The search query for a claim: its first `QUERY_WORDS` whitespace-separated words.
pub fn search_query(claim: &str) -> String {
    claim
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .take(QUERY_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Retrieve the reference for a claim.
///
/// Returns the top search hit and its summary. An empty search yields
/// `Reference::no_result()`. Any failure yields `Reference::error(..)`.
pub async fn fetch(source: &dyn ReferenceSource, claim: &str, max_sentences: u8) -> Reference {
    match try_fetch(source, claim, max_sentences).await {
        Ok(reference) => reference,
        Err(e) => {
            warn!(claim = claim, error = %e, "Reference lookup failed");
            Reference::error(&e)
        }
    }
}

async fn try_fetch(
    source: &dyn ReferenceSource,
    claim: &str,
    max_sentences: u8,
) -> Result<Reference, FetchError> {
    let query = search_query(claim);
    let titles = source.search(&query).await?;

    let Some(title) = titles.into_iter().next() else {
        debug!(query = %query, "No search results");
        return Ok(Reference::no_result());
    };

    let summary = source.summary(&title, max_sentences).await?;
    Ok(Reference::new(title, summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_keeps_first_eight_words() {
        let claim = "one two three four five six seven eight nine ten";
        assert_eq!(search_query(claim), "one two three four five six seven eight");
    }

    #[test]
    fn test_query_short_claim_uses_all_words() {
        assert_eq!(search_query("The Eiffel Tower is in Paris."), "The Eiffel Tower is in Paris.");
    }

    #[test]
    fn test_query_splits_on_information_separators() {
        assert_eq!(search_query("Mount\u{1f}Everest\u{1c}is tall"), "Mount Everest is tall");
    }

    #[test]
    fn test_query_collapses_whitespace() {
        assert_eq!(search_query("  Mount\tEverest \n is tall "), "Mount Everest is tall");
    }
}
