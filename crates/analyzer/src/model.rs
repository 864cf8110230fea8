//! Fixed-weight linear model and logistic scoring.
//!
//! The weight table is a design parameter, not a trained artifact. It is a
//! process-wide constant: substitute values change every downstream verdict,
//! so [`REFERENCE_WEIGHTS`] must stay fixed for output compatibility.

use serde::Serialize;

use crate::features::{Feature, FeatureVector};

/// Binary verdict of the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prediction {
    Real,
    Fake,
}

/// Signed per-feature weights plus the bias term.
///
/// Positive weights push toward `Fake` as the feature grows; negative
/// weights (citations, passive voice, complexity) push toward `Real`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightTable {
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
    pub bias: f64,
}

/// The reference weight table.
pub const REFERENCE_WEIGHTS: WeightTable = WeightTable {
    sensationalism_score: 0.35,
    emotional_words: 0.25,
    clickbait_score: 0.30,
    political_bias: 0.20,
    source_citations: -0.40,
    exclamation_count: 0.15,
    capitalization_ratio: 0.20,
    spelling_errors: 0.10,
    passive_voice: -0.05,
    sentence_complexity: -0.15,
    bias: -0.10,
};

impl Default for WeightTable {
    fn default() -> Self {
        REFERENCE_WEIGHTS
    }
}

impl WeightTable {
    /// Weight of a single feature.
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

    /// Pre-sigmoid linear combination: bias + Σ weight·feature.
    pub fn logit(&self, features: &FeatureVector) -> f64 {
        features
            .entries()
            .iter()
            .fold(self.bias, |acc, (feature, value)| {
                acc + self.get(*feature) * value
            })
    }
}

/// Scored outcome for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub prediction: Prediction,
    /// Probability of `Fake`, in `[0, 1]`.
    pub probability: f64,
    /// Distance from the 0.5 decision boundary, rescaled to `[0, 1]`.
    pub confidence: f64,
}

/// Logistic transform, overflow-safe: `exp` never receives a large positive
/// argument, so the result is finite for any logit.
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Score a feature vector against the reference weights.
pub fn score(features: &FeatureVector) -> Score {
    score_with(features, &REFERENCE_WEIGHTS)
}

/// Score a feature vector against an explicit weight table.
pub fn score_with(features: &FeatureVector, weights: &WeightTable) -> Score {
    let probability = sigmoid(weights.logit(features));
    let prediction = if probability > 0.5 {
        Prediction::Fake
    } else {
        Prediction::Real
    };
    let confidence = (probability - 0.5).abs() * 2.0;

    Score {
        prediction,
        probability,
        confidence,
    }
}
