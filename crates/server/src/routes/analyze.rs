use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use analyzer::AnalysisReport;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request to analyze a single article
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Article text content
    pub text: String,
}

/// Batch analysis request
#[derive(Debug, Deserialize)]
pub struct BatchAnalyzeRequest {
    pub texts: Vec<String>,
}

/// Single result in a batch response
#[derive(Debug, Serialize)]
pub struct BatchAnalyzeResult {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<AnalysisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch analysis response
#[derive(Debug, Serialize)]
pub struct BatchAnalyzeResponse {
    pub processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<BatchAnalyzeResult>,
}

/// Validate the article length, then run the full analysis pipeline.
///
/// The minimum-length gate runs before the core is invoked; anything at or
/// above the floor (including degenerate repetitive text) produces a
/// well-formed report.
fn run_analysis(state: &ServerState, text: &str) -> Result<AnalysisReport, ServerError> {
    let len = text.chars().count();
    let min = state.config.min_text_chars;
    if len < min {
        return Err(ServerError::TextTooShort { len, min });
    }
    Ok(veritext::analyze_article_with(
        text,
        &state.weights,
        &state.report_cfg,
    ))
}

/// Analyze a single article.
///
/// Runs text through the pipeline: feature extraction → linear scoring →
/// result shaping. The response carries the verdict, probability,
/// confidence, the ranked top factors, and an auxiliary statistics block.
///
/// # Example
/// ```json
/// // Request
/// { "text": "At least one hundred characters of article text ..." }
///
/// // Response
/// {
///   "prediction": "real",
///   "confidence": 0.12,
///   "probability": 0.44,
///   "features": [
///     { "name": "source_citations", "label": "Source Citations",
///       "value": 0.66, "leaning": "legitimate" }
///   ],
///   "additional_features": { "text_length": 142, "exclamation_count": 0 }
/// }
/// ```
pub async fn analyze_article(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<AnalyzeRequest>,
) -> ServerResult<impl IntoResponse> {
    let report = run_analysis(&state, &request.text)?;
    Ok(Json(report))
}

/// Analyze multiple articles in one request.
///
/// The core is pure and CPU-bound, so items are processed in order on the
/// handler task; results preserve input order and per-item failures do not
/// abort the batch.
pub async fn analyze_batch(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<BatchAnalyzeRequest>,
) -> ServerResult<impl IntoResponse> {
    let results: Vec<BatchAnalyzeResult> = request
        .texts
        .iter()
        .map(|text| match run_analysis(&state, text) {
            Ok(report) => BatchAnalyzeResult {
                status: "success".to_string(),
                report: Some(report),
                error: None,
            },
            Err(err) => BatchAnalyzeResult {
                status: "error".to_string(),
                report: None,
                error: Some(err.to_string()),
            },
        })
        .collect();

    let successful = results.iter().filter(|r| r.status == "success").count();
    let failed = results.len() - successful;

    Ok(Json(BatchAnalyzeResponse {
        processed: results.len(),
        successful,
        failed,
        results,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn test_state(min_text_chars: usize) -> ServerState {
        ServerState::new(ServerConfig {
            min_text_chars,
            ..Default::default()
        })
        .expect("state builds")
    }

    #[test]
    fn short_text_is_rejected_before_analysis() {
        let state = test_state(100);
        let result = run_analysis(&state, "too short");
        assert!(matches!(
            result,
            Err(ServerError::TextTooShort { len: 9, min: 100 })
        ));
    }

    #[test]
    fn length_floor_counts_characters_not_bytes() {
        let state = test_state(10);
        // Ten multi-byte characters pass a ten-character floor.
        let result = run_analysis(&state, "éééééééééé");
        assert!(result.is_ok());
    }

    #[test]
    fn accepted_text_produces_a_full_report() {
        let state = test_state(10);
        let report = run_analysis(&state, "a perfectly ordinary piece of writing.")
            .expect("analysis succeeds");
        assert_eq!(report.features.len(), 5);
        assert!((0.0..=1.0).contains(&report.probability));
    }
}
