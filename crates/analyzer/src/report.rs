//! Presentation shaping of a scored analysis.
//!
//! This stage performs no scoring: it ranks the extracted signals, tags each
//! with the direction it pushes the verdict, attaches human-readable labels,
//! and bundles the auxiliary statistics into the final response shape.
//! Shaping is idempotent, and the ranking sort is stable so ties keep the
//! canonical feature order.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::features::{Feature, FeatureVector};
use crate::model::{Prediction, Score, WeightTable};
use crate::stats::TextStats;

/// Which way a ranked factor pushes the verdict.
///
/// Direction follows the sign of the weighted contribution (value × weight),
/// so negative-weight signals such as citations read as legitimate-leaning
/// when present. A zero contribution tags legitimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Leaning {
    Fake,
    Legitimate,
}

/// One entry of the ranked top-N factor list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFeature {
    /// Wire key of the feature ([`Feature::key`]).
    pub name: &'static str,
    /// Human-readable label.
    pub label: Cow<'static, str>,
    /// Raw feature value in `[0, 1]`.
    pub value: f64,
    pub leaning: Leaning,
}

/// Presentation knobs for the shaper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// How many ranked factors to include.
    #[serde(default = "default_top_features")]
    pub top_features: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_features: default_top_features(),
        }
    }
}

fn default_top_features() -> usize {
    5
}

/// Complete presentation-ready analysis result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub prediction: Prediction,
    pub confidence: f64,
    pub probability: f64,
    /// Top factors, ranked by descending magnitude.
    pub features: Vec<RankedFeature>,
    /// Unranked statistics block.
    pub additional_features: TextStats,
}

/// Build the display-ready report from a feature vector and its score.
pub fn shape(
    features: &FeatureVector,
    score: Score,
    stats: TextStats,
    weights: &WeightTable,
    cfg: &ReportConfig,
) -> AnalysisReport {
    let mut ranked: Vec<(Feature, f64)> = features.entries().to_vec();
    // Stable: equal magnitudes keep canonical feature order.
    ranked.sort_by(|a, b| {
        b.1.abs()
            .partial_cmp(&a.1.abs())
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(cfg.top_features);

    let features = ranked
        .into_iter()
        .map(|(feature, value)| RankedFeature {
            name: feature.key(),
            label: display_label(feature.key()),
            value,
            leaning: leaning_of(value, weights.get(feature)),
        })
        .collect();

    AnalysisReport {
        prediction: score.prediction,
        confidence: score.confidence,
        probability: score.probability,
        features,
        additional_features: stats,
    }
}

fn leaning_of(value: f64, weight: f64) -> Leaning {
    if value * weight > 0.0 {
        Leaning::Fake
    } else {
        Leaning::Legitimate
    }
}

/// Human-readable label for a wire key.
///
/// Unknown keys fall back to a title-cased, underscore-replaced rendering
/// ("avg_word_length" → "Avg Word Length").
pub fn display_label(key: &str) -> Cow<'static, str> {
    let fixed = match key {
        "sensationalism_score" => "Sensationalist Language",
        "emotional_words" => "Emotional Content",
        "clickbait_score" => "Clickbait Patterns",
        "political_bias" => "Political Bias",
        "source_citations" => "Source Citations",
        "exclamation_count" => "Exclamation Marks",
        "capitalization_ratio" => "ALL CAPS Usage",
        "spelling_errors" => "Spelling Errors",
        "passive_voice" => "Passive Voice",
        "sentence_complexity" => "Sentence Complexity",
        "text_length" => "Text Length",
        "question_count" => "Question Marks",
        "all_caps_count" => "ALL CAPS Words",
        "sensationalist_word_count" => "Sensationalist Words",
        "avg_word_length" => "Average Word Length",
        _ => return Cow::Owned(title_case(key)),
    };
    Cow::Borrowed(fixed)
}

fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
