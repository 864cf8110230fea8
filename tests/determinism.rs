//! Determinism and ranking-stability guarantees of the pipeline.

use veritext::{analyze_article, analyze_article_with, ReportConfig, REFERENCE_WEIGHTS};

#[test]
fn repeated_analysis_is_bit_identical() {
    let text = "BREAKING: experts say this SHOCKING development will shock you! \
        According to sources confirm reports, the scandal has been growing.";

    let first = analyze_article(text);
    let second = analyze_article(text);

    assert_eq!(first, second);
    assert_eq!(first.probability.to_bits(), second.probability.to_bits());
    assert_eq!(first.confidence.to_bits(), second.confidence.to_bits());
}

#[test]
fn ranking_order_is_stable_across_calls() {
    let text = "an unremarkable piece of text with balanced, even phrasing.";
    let runs: Vec<Vec<&str>> = (0..5)
        .map(|_| {
            analyze_article(text)
                .features
                .iter()
                .map(|f| f.name)
                .collect()
        })
        .collect();

    for run in &runs[1..] {
        assert_eq!(run, &runs[0]);
    }
}

#[test]
fn explicit_defaults_match_the_convenience_entry_point() {
    let text = "the quick brown fox jumps over the lazy dog, repeatedly.";
    let implicit = analyze_article(text);
    let explicit = analyze_article_with(text, &REFERENCE_WEIGHTS, &ReportConfig::default());
    assert_eq!(implicit, explicit);
}
