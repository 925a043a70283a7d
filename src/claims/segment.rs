// Sentence-boundary claim segmentation.
//
// A boundary is a whitespace run directly after `.`, `!` or `?`. The
// punctuation stays on the left fragment and the whitespace is consumed.
// Fragments of 10 characters or fewer are noise ("ok.", "Yes!") and dropped.

/// Fragments must be strictly longer than this many characters to count as claims.
pub const MIN_CLAIM_CHARS: usize = 10;

/// Split text into candidate claims, preserving their original order.
///
/// Returns an empty vector when nothing survives the length filter. That is
/// a valid outcome, not an error; the pipeline reports it as "no claims".
pub fn segment(text: &str) -> Vec<String> {
    split_sentences(text.trim_matches(is_separator))
        .into_iter()
        .map(|s| s.trim_matches(is_separator))
        .filter(|s| s.chars().count() > MIN_CLAIM_CHARS)
        .map(str::to_string)
        .collect()
}

/// Whitespace for claim boundaries and trimming.
///
/// Unicode White_Space plus the ASCII information separators U+001C..U+001F,
/// which plain-text exports sometimes use as record breaks.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// True when `text` has nothing but separators in it.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_separator)
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split on whitespace runs that follow sentence punctuation.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if is_separator(c) && prev.is_some_and(is_terminator) {
            fragments.push(&text[start..i]);

            let mut end = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if !is_separator(next) {
                    break;
                }
                end = j + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(c);
    }

    fragments.push(&text[start..]);
    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sentences() {
        let claims = segment("The Eiffel Tower is in Paris. It was built in 1889.");
        assert_eq!(
            claims,
            vec!["The Eiffel Tower is in Paris.", "It was built in 1889."]
        );
    }

    #[test]
    fn test_all_terminators() {
        let claims = segment("Is the moon made of rock? Yes it is made of rock! Scientists agree.");
        assert_eq!(claims.len(), 3);
        assert_eq!(claims[0], "Is the moon made of rock?");
        assert_eq!(claims[1], "Yes it is made of rock!");
        assert_eq!(claims[2], "Scientists agree.");
    }

    #[test]
    fn test_punctuation_without_whitespace_does_not_split() {
        let claims = segment("Version 3.14 of the software shipped in 2020.");
        assert_eq!(claims, vec!["Version 3.14 of the software shipped in 2020."]);
    }

    #[test]
    fn test_whitespace_without_punctuation_does_not_split() {
        let claims = segment("Water boils at one hundred degrees\nat sea level");
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn test_newlines_and_runs_are_consumed() {
        let claims = segment("Rust is a systems language.\n\n   Ferris is its mascot crab.");
        assert_eq!(
            claims,
            vec!["Rust is a systems language.", "Ferris is its mascot crab."]
        );
    }

    #[test]
    fn test_short_fragments_dropped() {
        let claims = segment("Ok. Sure. The Nile is the longest river in Africa.");
        assert_eq!(claims, vec!["The Nile is the longest river in Africa."]);
    }

    #[test]
    fn test_length_threshold_is_exclusive() {
        // Exactly 10 characters is dropped, 11 is kept
        assert!(segment("abcdefghi.").is_empty());
        assert_eq!(segment("abcdefghij."), vec!["abcdefghij."]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Ten characters, but more than ten bytes
        assert!(segment("ééééééééé.").is_empty());
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_information_separators_are_whitespace() {
        let claims = segment("\u{1e}The Danube flows east.\u{1f}Vienna lies on its banks.\u{1c}");
        assert_eq!(
            claims,
            vec!["The Danube flows east.", "Vienna lies on its banks."]
        );
        assert!(is_blank("\u{1c}\u{1d} \n"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_consecutive_terminators() {
        let claims = segment("Wait... The Great Wall is visible from orbit?! Not really true.");
        assert_eq!(
            claims,
            vec!["The Great Wall is visible from orbit?!", "Not really true."]
        );
    }
}
