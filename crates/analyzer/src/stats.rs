//! Auxiliary descriptive statistics reported alongside the ranked features.
//!
//! These are raw counts for display only; none of them feed the scorer.

use serde::Serialize;

use crate::lexicons;

/// Unranked informational block of the analysis response.
///
/// Field names are the wire keys of the `additional_features` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStats {
    /// Whitespace-separated word count.
    pub text_length: usize,
    pub exclamation_count: usize,
    pub question_count: usize,
    pub all_caps_count: usize,
    pub sensationalist_word_count: usize,
    /// Characters per word, floored to a one-word denominator.
    pub avg_word_length: f64,
}

/// Compute the statistics block from the original-case text.
pub fn text_stats(text: &str) -> TextStats {
    let words = text.split_whitespace().count();
    let chars = text.chars().count();

    TextStats {
        text_length: words,
        exclamation_count: text.matches('!').count(),
        question_count: text.matches('?').count(),
        all_caps_count: lexicons::ALL_CAPS.find_iter(text).count(),
        sensationalist_word_count: lexicons::SENSATIONALIST.find_iter(text).count(),
        avg_word_length: chars as f64 / words.max(1) as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_basic_signals() {
        let stats = text_stats("BREAKING news! Is this SHOCKING? Yes!");
        assert_eq!(stats.text_length, 6);
        assert_eq!(stats.exclamation_count, 2);
        assert_eq!(stats.question_count, 1);
        assert_eq!(stats.all_caps_count, 2);
        assert_eq!(stats.sensationalist_word_count, 2);
    }

    #[test]
    fn empty_text_produces_zeroes_without_dividing_by_zero() {
        let stats = text_stats("");
        assert_eq!(stats.text_length, 0);
        assert_eq!(stats.avg_word_length, 0.0);
    }

    #[test]
    fn average_word_length_uses_full_char_count() {
        // 11 chars (including the space) over 2 words.
        let stats = text_stats("hello there");
        assert!((stats.avg_word_length - 5.5).abs() < 1e-12);
    }
}
