//! Keyword density — what share of the text's tokens exactly match a
//! requested keyword.
//!
//! KNOWN LIMITATION: matching is exact single-token equality. A multi-word
//! keyword like "machine learning" can never match because tokens are single
//! words; substrings never match either. This mirrors the reference behavior
//! and is preserved on purpose — n-gram matching would change observable
//! output.

use crate::analysis::round2;

/// Computes keyword density as a percentage of tokens matching the keyword
/// set, rounded to 2 decimal places.
///
/// `keywords_spec` is a comma-separated list; entries are trimmed,
/// lower-cased, and empty entries discarded. Text with no tokens (or an
/// empty keyword set) yields 0.0.
///
/// NOTE: the token count here is NOT the same as the facade's `word_count`.
/// This path tokenizes word-character runs; `word_count` splits on
/// whitespace. The two disagree on contractions and punctuation and that
/// discrepancy is intentional (see [`super::analyze_content`]).
pub fn keyword_density(text: &str, keywords_spec: &str) -> f64 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }

    let keywords = parse_keywords(keywords_spec);

    let total_matches: usize = keywords
        .iter()
        .map(|kw| tokens.iter().filter(|t| *t == kw).count())
        .sum();

    round2(total_matches as f64 / tokens.len() as f64 * 100.0)
}

/// Splits text into lower-cased runs of Unicode word characters
/// (alphanumerics and `_`).
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Parses a comma-separated keyword spec into normalized keyword strings.
pub fn parse_keywords(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_density() {
        // 2 of 3 tokens match
        assert_eq!(keyword_density("cats love cats", "cats"), 66.67);
    }

    #[test]
    fn test_density_is_case_insensitive_both_ways() {
        let a = keyword_density("Cats love CATS", "cats");
        let b = keyword_density("cats love cats", "CATS");
        assert_eq!(a, b);
        assert_eq!(a, 66.67);
    }

    #[test]
    fn test_empty_text_returns_zero() {
        assert_eq!(keyword_density("", "rust, ai"), 0.0);
        assert_eq!(keyword_density("!!! --- ???", "rust"), 0.0);
    }

    #[test]
    fn test_empty_keyword_spec_returns_zero() {
        assert_eq!(keyword_density("some words here", ""), 0.0);
        assert_eq!(keyword_density("some words here", " , , "), 0.0);
    }

    #[test]
    fn test_multi_word_keywords_never_match() {
        // Tokens are single words; a phrase can never equal one token.
        assert_eq!(
            keyword_density("machine learning is fun", "machine learning"),
            0.0
        );
    }

    #[test]
    fn test_substrings_do_not_match() {
        assert_eq!(keyword_density("scatter plot", "cat"), 0.0);
    }

    #[test]
    fn test_multiple_keywords_sum_matches() {
        // "rust" twice + "fast" once out of 5 tokens
        let d = keyword_density("rust is fast and rust", "rust, fast");
        assert_eq!(d, 60.0);
    }

    #[test]
    fn test_punctuation_does_not_block_matches() {
        // Tokenization strips punctuation, unlike whitespace word counting.
        assert_eq!(keyword_density("Rust, rust. RUST!", "rust"), 100.0);
    }

    #[test]
    fn test_parse_keywords_normalizes() {
        assert_eq!(
            parse_keywords(" Rust , , AI ,machine learning,"),
            vec!["rust", "ai", "machine learning"]
        );
    }

    #[test]
    fn test_tokenize_splits_on_non_word_chars() {
        assert_eq!(tokenize("don't stop"), vec!["don", "t", "stop"]);
        assert_eq!(tokenize("snake_case stays"), vec!["snake_case", "stays"]);
    }
}
