//! SEO text analysis — the metrics computed over every generated text.
//!
//! Everything in this module is a pure, stateless function of its inputs:
//! no I/O, no retained state, safe to call concurrently. Any string input is
//! acceptable, including empty ones — nothing here returns an error.

pub mod density;
pub mod readability;
pub mod syllables;

use serde::Serialize;

use crate::analysis::density::{keyword_density, parse_keywords};
use crate::analysis::readability::flesch_reading_ease;

/// Metrics for one generated text, serialized in the wire shape the frontend
/// expects (`wordCount` / `readability` / `keywordDensity`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub word_count: usize,
    /// Flesch Reading Ease. Typically 0–100 but unbounded for degenerate
    /// input; never clamped.
    pub readability: f64,
    /// Percentage of tokens matching the keyword set.
    pub keyword_density: f64,
}

/// Computes all metrics for a generated text against a comma-separated
/// keyword spec.
///
/// `word_count` is a raw whitespace split of the text. Keyword density uses
/// its own word-character tokenization, so the two counts can disagree (a
/// contraction is one whitespace word but two tokens). The two rules evolved
/// independently and unifying them would change observable output, so the
/// discrepancy stays.
pub fn analyze_content(text: &str, keywords_spec: &str) -> ContentMetrics {
    ContentMetrics {
        word_count: text.split_whitespace().count(),
        readability: flesch_reading_ease(text),
        keyword_density: keyword_density(text, keywords_spec),
    }
}

/// Derives human-readable improvement hints from computed metrics. Purely
/// advisory — the thresholds are rules of thumb, not SEO science.
pub fn suggestions(metrics: &ContentMetrics, keywords_spec: &str) -> Vec<String> {
    let mut out = Vec::new();

    if metrics.word_count > 0 && metrics.word_count < 100 {
        out.push(format!(
            "Content is short ({} words). Consider expanding the main points.",
            metrics.word_count
        ));
    }

    if metrics.word_count > 0 && metrics.readability < 60.0 {
        out.push(
            "Readability is on the low side. Shorter sentences and simpler words will help."
                .to_string(),
        );
    }

    let has_keywords = !parse_keywords(keywords_spec).is_empty();
    if has_keywords && metrics.keyword_density == 0.0 && metrics.word_count > 0 {
        out.push("None of the requested keywords appear in the content.".to_string());
    } else if metrics.keyword_density > 3.0 {
        out.push(
            "Keyword density is above 3% — this can read as keyword stuffing.".to_string(),
        );
    }

    out
}

/// Rounds to 2 decimal places. All reported metric floats pass through this.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
