//! JSON response shape returned to boundary callers.

use veritext::analyze_article;

#[test]
fn report_carries_the_expected_top_level_keys() {
    let report = analyze_article("SHOCKING!!! You won't believe the truth about this scandal!");
    let value = serde_json::to_value(&report).expect("report serializes");
    let object = value.as_object().expect("top level is an object");

    for key in [
        "prediction",
        "confidence",
        "probability",
        "features",
        "additional_features",
    ] {
        assert!(object.contains_key(key), "missing {key}");
    }
    assert_eq!(object["prediction"], "fake");
}

#[test]
fn ranked_features_expose_name_label_value_and_leaning() {
    let report = analyze_article("a modest piece of writing, with one sentence only.");
    let value = serde_json::to_value(&report).expect("report serializes");

    let features = value["features"].as_array().expect("ranked array");
    assert_eq!(features.len(), 5);
    for entry in features {
        let entry = entry.as_object().expect("ranked entry is an object");
        for key in ["name", "label", "value", "leaning"] {
            assert!(entry.contains_key(key), "missing {key}");
        }
        let leaning = entry["leaning"].as_str().expect("leaning is a string");
        assert!(leaning == "fake" || leaning == "legitimate");
    }
}

#[test]
fn additional_features_match_the_boundary_contract() {
    let report = analyze_article("Why now? A question! And another thing entirely.");
    let value = serde_json::to_value(&report).expect("report serializes");

    let stats = value["additional_features"]
        .as_object()
        .expect("stats object");
    for key in [
        "text_length",
        "exclamation_count",
        "question_count",
        "all_caps_count",
        "sensationalist_word_count",
        "avg_word_length",
    ] {
        assert!(stats.contains_key(key), "missing {key}");
    }
    assert_eq!(stats["exclamation_count"], 1);
    assert_eq!(stats["question_count"], 1);
}