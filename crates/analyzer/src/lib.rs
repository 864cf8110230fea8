//! Veritext Analyzer
//!
//! Heuristic fake-news analysis core: a fixed-lexicon feature extractor, a
//! fixed-weight linear scorer with a logistic transform, and a presentation
//! shaper that produces the display-ready report.
//!
//! ## Contract
//!
//! - Every operation is a pure function of its input text and the fixed
//!   lexicon/weight tables. No I/O, no clocks, no shared mutable state.
//! - Identical input yields a bit-identical [`AnalysisReport`].
//! - Degenerate input (empty string, pure whitespace, no sentences) never
//!   fails: it produces the baseline verdict (`real`, sigmoid(−0.1)).
//! - Concurrent calls are fully independent; nothing here needs a lock.
//!
//! ## Pipeline
//!
//! 1. **Extract** ([`features::extract`]): ten lexical/statistical signals,
//!    each clamped to `[0, 1]`.
//! 2. **Score** ([`model::score_with`]): weighted sum + bias through a
//!    numerically stable sigmoid; verdict, probability, confidence.
//! 3. **Shape** ([`report::shape`]): stable top-N ranking, direction tags,
//!    labels, auxiliary statistics.
//!
//! ## Example
//!
//! ```
//! let report = analyzer::analyze("SHOCKING!!! You won't believe this scandal!");
//!
//! assert_eq!(report.features.len(), 5);
//! assert!((0.0..=1.0).contains(&report.probability));
//! ```

pub mod features;
mod lexicons;
pub mod model;
pub mod report;
pub mod stats;

pub use crate::features::{Feature, FeatureVector};
pub use crate::model::{score, score_with, sigmoid, Prediction, Score, WeightTable, REFERENCE_WEIGHTS};
pub use crate::report::{display_label, shape, AnalysisReport, Leaning, RankedFeature, ReportConfig};
pub use crate::stats::{text_stats, TextStats};

/// Analyze one article with the reference weights and default presentation.
pub fn analyze(text: &str) -> AnalysisReport {
    analyze_with(text, &REFERENCE_WEIGHTS, &ReportConfig::default())
}

/// Analyze one article with explicit weight and presentation configuration.
pub fn analyze_with(text: &str, weights: &WeightTable, cfg: &ReportConfig) -> AnalysisReport {
    let features = features::extract(text);
    let score = model::score_with(&features, weights);
    let stats = stats::text_stats(text);
    report::shape(&features, score, stats, weights, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_is_deterministic() {
        let text = "BREAKING: experts say this SHOCKING scandal will shock you!";
        assert_eq!(analyze(text), analyze(text));
    }

    #[test]
    fn empty_input_produces_the_baseline_report() {
        let report = analyze("");
        assert_eq!(report.prediction, Prediction::Real);
        assert!((report.probability - sigmoid(-0.1)).abs() < 1e-12);
        for ranked in &report.features {
            assert_eq!(ranked.value, 0.0);
        }
    }

    #[test]
    fn probability_and_confidence_stay_in_range() {
        let texts = [
            "",
            "plain ordinary text with nothing remarkable about it",
            "SHOCKING!!! EXPLOSIVE!!! you won't believe the truth about this scandal",
        ];
        for text in texts {
            let report = analyze(text);
            assert!((0.0..=1.0).contains(&report.probability));
            assert!((0.0..=1.0).contains(&report.confidence));
        }
    }
}
