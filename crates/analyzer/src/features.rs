//! Feature extraction: ten lexical/statistical signals per document.
//!
//! ## Contract
//!
//! - Extraction is a pure function of the input text and the fixed lexicon
//!   tables. No I/O, no clocks, no global mutable state.
//! - Identical input always yields a bit-identical [`FeatureVector`].
//! - Every value is clamped to `[0, 1]`, and every key is always present.
//!
//! Word-list and phrase features are evaluated against the lowercased text;
//! exclamation and capitalization signals look at the original-case text.

use serde::Serialize;
use tracing::debug;

use crate::lexicons;

/// Identifier for one extracted signal.
///
/// Declaration order is the canonical order of the vector and the tie-break
/// order when ranking features by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Sensationalism,
    EmotionalWords,
    Clickbait,
    PoliticalBias,
    SourceCitations,
    ExclamationCount,
    CapitalizationRatio,
    SpellingErrors,
    PassiveVoice,
    SentenceComplexity,
}

impl Feature {
    /// All features in canonical order.
    pub const ALL: [Feature; 10] = [
        Feature::Sensationalism,
        Feature::EmotionalWords,
        Feature::Clickbait,
        Feature::PoliticalBias,
        Feature::SourceCitations,
        Feature::ExclamationCount,
        Feature::CapitalizationRatio,
        Feature::SpellingErrors,
        Feature::PassiveVoice,
        Feature::SentenceComplexity,
    ];

    /// Stable wire key, identical to the JSON field names of [`FeatureVector`].
    pub fn key(self) -> &'static str {
        match self {
            Feature::Sensationalism => "sensationalism_score",
            Feature::EmotionalWords => "emotional_words",
            Feature::Clickbait => "clickbait_score",
            Feature::PoliticalBias => "political_bias",
            Feature::SourceCitations => "source_citations",
            Feature::ExclamationCount => "exclamation_count",
            Feature::CapitalizationRatio => "capitalization_ratio",
            Feature::SpellingErrors => "spelling_errors",
            Feature::PassiveVoice => "passive_voice",
            Feature::SentenceComplexity => "sentence_complexity",
        }
    }
}

/// The ten signals extracted from one document, each in `[0, 1]`.
///
/// Created fresh per extraction; a value type with no behavior beyond
/// accessors. Serializes to a JSON map keyed by [`Feature::key`] names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub sensationalism_score: f64,
    pub emotional_words: f64,
    pub clickbait_score: f64,
    pub political_bias: f64,
    pub source_citations: f64,
    pub exclamation_count: f64,
    pub capitalization_ratio: f64,
    pub spelling_errors: f64,
    pub passive_voice: f64,
    pub sentence_complexity: f64,
}

impl FeatureVector {
    /// All-zero vector; what degenerate input extracts to.
    pub const ZERO: FeatureVector = FeatureVector {
        sensationalism_score: 0.0,
        emotional_words: 0.0,
        clickbait_score: 0.0,
        political_bias: 0.0,
        source_citations: 0.0,
        exclamation_count: 0.0,
        capitalization_ratio: 0.0,
        spelling_errors: 0.0,
        passive_voice: 0.0,
        sentence_complexity: 0.0,
    };

    /// Value of a single signal.
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Sensationalism => self.sensationalism_score,
            Feature::EmotionalWords => self.emotional_words,
            Feature::Clickbait => self.clickbait_score,
            Feature::PoliticalBias => self.political_bias,
            Feature::SourceCitations => self.source_citations,
            Feature::ExclamationCount => self.exclamation_count,
            Feature::CapitalizationRatio => self.capitalization_ratio,
            Feature::SpellingErrors => self.spelling_errors,
            Feature::PassiveVoice => self.passive_voice,
            Feature::SentenceComplexity => self.sentence_complexity,
        }
    }

    /// Entries in canonical order.
    pub fn entries(&self) -> [(Feature, f64); 10] {
        let mut out = [(Feature::Sensationalism, 0.0); 10];
        for (slot, feature) in out.iter_mut().zip(Feature::ALL) {
            *slot = (feature, self.get(feature));
        }
        out
    }
}

fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Extract the full feature vector from `text`.
///
/// Empty or whitespace-only input yields [`FeatureVector::ZERO`]; the
/// per-length denominators are floored so no division by zero can occur.
pub fn extract(text: &str) -> FeatureVector {
    let normalized = text.to_lowercase();
    let total_words = lexicons::WORD_TOKEN.find_iter(&normalized).count();

    // `count` hits normalized against one hit per `words_per_unit` words.
    // A zero-word document floors the denominator to 1.
    let scaled = |count: usize, words_per_unit: f64| -> f64 {
        let denominator = if total_words == 0 {
            1.0
        } else {
            total_words as f64 / words_per_unit
        };
        clamp01(count as f64 / denominator)
    };

    let sensationalist_count = lexicons::SENSATIONALIST.find_iter(&normalized).count();
    let emotional_count = lexicons::EMOTIONAL.find_iter(&normalized).count();
    let political_count = lexicons::POLITICAL.find_iter(&normalized).count();
    let misspelling_count = lexicons::MISSPELLED.find_iter(&normalized).count();
    let citation_count = lexicons::CITATIONS.find_iter(&normalized).count();
    let passive_count = lexicons::PASSIVE.find_iter(&normalized).count();

    // Each clickbait phrase present contributes a flat 0.2, regardless of
    // how many times it repeats.
    let clickbait_hits = lexicons::CLICKBAIT_PHRASES
        .iter()
        .filter(|phrase| normalized.contains(*phrase))
        .count();

    // Original-case signals.
    let exclamations = text.matches('!').count();
    let caps_count = lexicons::ALL_CAPS.find_iter(text).count();

    // Runs of .!? collapse to one split; a trailing delimiter still yields a
    // final empty segment, and that segment counts.
    let sentence_count = lexicons::SENTENCE_BREAK.split(text).count().max(1);
    let avg_sentence_len = total_words as f64 / sentence_count as f64;

    let vector = FeatureVector {
        sensationalism_score: scaled(sensationalist_count, 50.0),
        emotional_words: scaled(emotional_count, 30.0),
        clickbait_score: clamp01(clickbait_hits as f64 * 0.2),
        political_bias: scaled(political_count, 40.0),
        source_citations: clamp01(citation_count as f64 / 3.0),
        exclamation_count: clamp01(exclamations as f64 / 5.0),
        capitalization_ratio: scaled(caps_count, 20.0),
        spelling_errors: clamp01(misspelling_count as f64 / 3.0),
        passive_voice: clamp01(passive_count as f64 / 5.0),
        sentence_complexity: clamp01(avg_sentence_len / 25.0),
    };

    debug!(total_words, sentence_count, "features_extracted");
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_zero_vector() {
        assert_eq!(extract(""), FeatureVector::ZERO);
        assert_eq!(extract("   \n\t  "), FeatureVector::ZERO);
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "SHOCKING scandal!! Experts say this is why. According to a study.";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn all_values_stay_in_unit_interval() {
        let pathological = "SHOCKING!!! ".repeat(500);
        let vector = extract(&pathological);
        for (feature, value) in vector.entries() {
            assert!(
                (0.0..=1.0).contains(&value),
                "{} out of range: {value}",
                feature.key()
            );
        }
    }

    #[test]
    fn sensationalism_normalizes_per_fifty_words() {
        // 50 words, one sensationalist hit: 1 / (50/50) = 1.0.
        let mut words = vec!["word"; 49];
        words.push("shocking");
        let vector = extract(&words.join(" "));
        assert!((vector.sensationalism_score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn word_boundary_is_respected() {
        // "secretly" contains "secret" but must not count as a hit.
        let vector = extract("they acted secretly and quietly together");
        assert_eq!(vector.sensationalism_score, 0.0);
    }

    #[test]
    fn clickbait_is_presence_based() {
        let once = extract("find out what happened");
        let thrice = extract("find out, find out, find out");
        assert!((once.clickbait_score - 0.2).abs() < 1e-12);
        assert_eq!(once.clickbait_score, thrice.clickbait_score);
    }

    #[test]
    fn citations_count_every_occurrence() {
        // 3 occurrences / 3 saturates the feature.
        let text = "according to x, according to y, and according to z";
        let vector = extract(text);
        assert!((vector.source_citations - 1.0).abs() < 1e-12);
    }

    #[test]
    fn exclamations_counted_on_original_text_and_clamped() {
        let vector = extract("Stop!!!!! Now!!!!!");
        // 10 marks / 5 = 2.0, clamped to 1.0.
        assert!((vector.exclamation_count - 1.0).abs() < 1e-12);
    }

    #[test]
    fn capitalization_ignores_lowercased_view() {
        let upper = extract("THIS IS AN OUTRAGE today");
        let lower = extract("this is an outrage today");
        assert!(upper.capitalization_ratio > 0.0);
        assert_eq!(lower.capitalization_ratio, 0.0);
    }

    #[test]
    fn sentence_complexity_counts_trailing_empty_segment() {
        // "one two three." splits into ["one two three", ""]: 2 segments,
        // so 3 words / 2 segments / 25 = 0.06.
        let vector = extract("one two three.");
        assert!((vector.sentence_complexity - 0.06).abs() < 1e-12);
    }

    #[test]
    fn consecutive_delimiters_collapse() {
        let single = extract("one two three.");
        let multi = extract("one two three...");
        assert_eq!(single.sentence_complexity, multi.sentence_complexity);
    }

    #[test]
    fn unpunctuated_text_is_one_sentence() {
        // 100 words, 1 segment: 100/1/25 = 4.0, clamped.
        let text = vec!["word"; 100].join(" ");
        let vector = extract(&text);
        assert!((vector.sentence_complexity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn more_sensationalist_hits_never_lower_the_score() {
        // Fixed-length documents with an increasing hit count.
        let mut previous = -1.0;
        for hits in 0..=10 {
            let mut words = vec!["word"; 100 - hits];
            words.extend(std::iter::repeat("shocking").take(hits));
            let score = extract(&words.join(" ")).sensationalism_score;
            assert!(score >= previous, "score regressed at {hits} hits");
            previous = score;
        }
    }

    #[test]
    fn vector_serializes_with_wire_keys() {
        let value = serde_json::to_value(FeatureVector::ZERO).expect("serializable");
        let map = value.as_object().expect("map");
        assert_eq!(map.len(), 10);
        for feature in Feature::ALL {
            assert!(map.contains_key(feature.key()), "missing {}", feature.key());
        }
    }
}
