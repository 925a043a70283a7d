// Text normalization for lexical comparison.
//
// Both sides of a comparison go through the same pipeline so that case and
// punctuation never affect the token sets: lowercase, replace anything that
// isn't an ASCII letter, digit or whitespace with a space, then collapse
// whitespace runs.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("static pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern is valid"));

/// Normalize text for comparison.
///
/// The output contains only `a-z`, `0-9` and single spaces, with no leading
/// or trailing space. Never fails; empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced = NON_WORD.replace_all(&lowered, " ");
    WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
}

/// The set of unique tokens in the normalized form of `text`.
pub fn tokens(text: &str) -> HashSet<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
