//! Workspace umbrella crate for Veritext.
//!
//! This crate stitches together the analysis stages (feature extraction,
//! linear scoring, result shaping) so callers can analyze article text with
//! a single API entry point, and hosts a pluggable per-stage metrics
//! observer for the pipeline.

pub use analyzer::{
    analyze, analyze_with, display_label, score, score_with, shape, sigmoid, text_stats,
    AnalysisReport, Feature, FeatureVector, Leaning, Prediction, RankedFeature, ReportConfig,
    Score, TextStats, WeightTable, REFERENCE_WEIGHTS,
};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for analysis stages.
pub trait AnalysisMetrics: Send + Sync {
    fn record_extract(&self, latency: Duration);
    fn record_score(&self, latency: Duration, prediction: Prediction);
    fn record_shape(&self, latency: Duration);
}

/// Install or clear the global analysis metrics recorder.
pub fn set_analysis_metrics(recorder: Option<Arc<dyn AnalysisMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("analysis metrics lock poisoned");
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn AnalysisMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn AnalysisMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn AnalysisMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Analyze an article with the reference weights and default presentation.
///
/// Each stage's latency is reported to the installed [`AnalysisMetrics`]
/// recorder, if any.
pub fn analyze_article(text: &str) -> AnalysisReport {
    analyze_article_with(text, &REFERENCE_WEIGHTS, &ReportConfig::default())
}

/// Analyze an article with explicit weight and presentation configuration.
pub fn analyze_article_with(
    text: &str,
    weights: &WeightTable,
    cfg: &ReportConfig,
) -> AnalysisReport {
    let recorder = metrics_recorder();

    let start = Instant::now();
    let features = analyzer::features::extract(text);
    if let Some(recorder) = recorder.as_deref() {
        recorder.record_extract(start.elapsed());
    }

    let start = Instant::now();
    let scored = analyzer::model::score_with(&features, weights);
    if let Some(recorder) = recorder.as_deref() {
        recorder.record_score(start.elapsed(), scored.prediction);
    }

    let start = Instant::now();
    let stats = analyzer::stats::text_stats(text);
    let report = analyzer::report::shape(&features, scored, stats, weights, cfg);
    if let Some(recorder) = recorder.as_deref() {
        recorder.record_shape(start.elapsed());
    }

    tracing::debug!(
        prediction = ?report.prediction,
        probability = report.probability,
        confidence = report.confidence,
        "article_analyzed"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::RwLock as EventLock;

    #[derive(Default)]
    struct CountingMetrics {
        events: EventLock<Vec<&'static str>>,
    }

    impl CountingMetrics {
        fn snapshot(&self) -> Vec<&'static str> {
            self.events.read().unwrap().clone()
        }
    }

    impl AnalysisMetrics for CountingMetrics {
        fn record_extract(&self, _latency: Duration) {
            self.events.write().unwrap().push("extract");
        }

        fn record_score(&self, _latency: Duration, prediction: Prediction) {
            let label = match prediction {
                Prediction::Real => "score_real",
                Prediction::Fake => "score_fake",
            };
            self.events.write().unwrap().push(label);
        }

        fn record_shape(&self, _latency: Duration) {
            self.events.write().unwrap().push("shape");
        }
    }

    #[test]
    fn metrics_recorder_sees_every_stage() {
        let metrics = Arc::new(CountingMetrics::default());
        set_analysis_metrics(Some(metrics.clone()));

        let report = analyze_article("a perfectly ordinary sentence about nothing much at all.");
        assert_eq!(report.prediction, Prediction::Real);

        let events = metrics.snapshot();
        assert!(events.contains(&"extract"));
        assert!(events.contains(&"score_real"));
        assert!(events.contains(&"shape"));

        set_analysis_metrics(None);
    }

    #[test]
    fn empty_input_reaches_the_baseline_verdict() {
        let report = analyze_article("");
        assert_eq!(report.prediction, Prediction::Real);
        assert!((report.probability - sigmoid(-0.1)).abs() < 1e-12);
    }
}
