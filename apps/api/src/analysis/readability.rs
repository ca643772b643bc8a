//! Flesch Reading Ease scoring.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/word)`
//!
//! Higher = easier to read. Scores are NOT clamped — degenerate input
//! (one enormous word, no terminators) can legitimately land outside [0, 100]
//! and callers must tolerate that.

use crate::analysis::round2;
use crate::analysis::syllables::estimate_syllables;

/// Computes the Flesch Reading Ease score for a block of text, rounded to
/// 2 decimal places.
///
/// Empty text (no whitespace-separated words) scores 0.0. This is a defined
/// sentinel, chosen over a max score so a blank generation reads as "nothing
/// to score" rather than "perfectly readable".
///
/// Sentence counting is deliberately naive: every literal `.`, `!`, or `?`
/// counts, so decimal numbers and ellipses inflate the sentence count. The
/// count is floored at 1 so terminator-free text still divides cleanly.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    let num_words = words.len();
    if num_words == 0 {
        return 0.0;
    }

    let num_sentences = count_sentence_terminators(text).max(1);
    let num_syllables: usize = words.iter().map(|w| estimate_syllables(w)).sum();

    let words_per_sentence = num_words as f64 / num_sentences as f64;
    let syllables_per_word = num_syllables as f64 / num_words as f64;

    round2(206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Counts literal `.` `!` `?` occurrences anywhere in the text.
fn count_sentence_terminators(text: &str) -> usize {
    text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count()
}
