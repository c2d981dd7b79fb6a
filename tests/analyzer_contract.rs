//! Contract tests for the analyzer against a scripted mock provider.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use cancel_insight::analyzer::{
    Analyzer, EMPTY_INPUT_SUMMARY, ERROR_SUGGESTIONS, ERROR_SUMMARY,
};
use cancel_insight::providers::ReasonModel;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted collaborator: returns a fixed payload (or error) and counts calls.
struct MockModel {
    reply: std::result::Result<String, String>,
    calls: AtomicUsize,
}

impl MockModel {
    fn replying(payload: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(payload.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReasonModel for MockModel {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(s) => Ok(s.clone()),
            Err(e) => Err(anyhow!("{}", e)),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn reasons(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_well_formed_input_yields_complete_result() {
    let model = MockModel::replying(r#"{"summary": "themes", "suggestions": "actions"}"#);
    let analyzer = Analyzer::new(model.clone());

    let result = analyzer.analyze(&reasons(&["Too expensive.", "Car smelled."])).await;
    assert!(!result.summary.is_empty());
    assert!(!result.suggestions.is_empty());
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_empty_input_short_circuits_without_model_call() {
    let model = MockModel::replying(r#"{"summary": "S", "suggestions": "T"}"#);
    let analyzer = Analyzer::new(model.clone());

    let result = analyzer.analyze(&[]).await;
    assert_eq!(result.summary, EMPTY_INPUT_SUMMARY);
    assert_eq!(result.suggestions, "");
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_all_blank_input_short_circuits_without_model_call() {
    let model = MockModel::replying(r#"{"summary": "S", "suggestions": "T"}"#);
    let analyzer = Analyzer::new(model.clone());

    let result = analyzer.analyze(&reasons(&["", "   ", "\n"])).await;
    assert_eq!(result.summary, EMPTY_INPUT_SUMMARY);
    assert_eq!(result.suggestions, "");
    assert_eq!(model.call_count(), 0);
}

#[tokio::test]
async fn test_provider_failure_maps_to_fixed_fallback() {
    let model = MockModel::failing("connection refused");
    let analyzer = Analyzer::new(model.clone());

    let result = analyzer.analyze(&reasons(&["Late pickup."])).await;
    assert_eq!(result.summary, ERROR_SUMMARY);
    assert_eq!(result.suggestions, ERROR_SUGGESTIONS);
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_missing_suggestions_rejected_to_fallback() {
    let model = MockModel::replying(r#"{"summary": "only half"}"#);
    let analyzer = Analyzer::new(model.clone());

    let result = analyzer.analyze(&reasons(&["Late pickup."])).await;
    assert_eq!(result.summary, ERROR_SUMMARY);
    assert_eq!(result.suggestions, ERROR_SUGGESTIONS);
}

#[tokio::test]
async fn test_non_json_output_rejected_to_fallback() {
    let model = MockModel::replying("Here are my thoughts as prose, not JSON.");
    let analyzer = Analyzer::new(model.clone());

    let result = analyzer.analyze(&reasons(&["Late pickup."])).await;
    assert_eq!(result.summary, ERROR_SUMMARY);
}

#[tokio::test]
async fn test_end_to_end_echo_scenario() {
    let model = MockModel::replying(r#"{"summary": "S", "suggestions": "T"}"#);
    let analyzer = Analyzer::new(model.clone());

    let result = analyzer
        .analyze(&reasons(&[
            "Vehicle was not clean.",
            "Booked by mistake.",
            "Found a better price elsewhere.",
        ]))
        .await;
    assert_eq!(result.summary, "S");
    assert_eq!(result.suggestions, "T");
    assert_eq!(model.call_count(), 1);
}

#[tokio::test]
async fn test_fenced_model_output_accepted() {
    let model =
        MockModel::replying("```json\n{\"summary\": \"S\", \"suggestions\": \"T\"}\n```");
    let analyzer = Analyzer::new(model.clone());

    let result = analyzer.analyze(&reasons(&["Late pickup."])).await;
    assert_eq!(result.summary, "S");
    assert_eq!(result.suggestions, "T");
}

#[tokio::test]
async fn test_concurrent_analyses_are_independent() {
    let ok = MockModel::replying(r#"{"summary": "S", "suggestions": "T"}"#);
    let bad = MockModel::failing("boom");
    let a = Analyzer::new(ok.clone());
    let b = Analyzer::new(bad.clone());

    let reasons_a = reasons(&["one"]);
    let reasons_b = reasons(&["two"]);
    let (ra, rb) = tokio::join!(a.analyze(&reasons_a), b.analyze(&reasons_b));
    assert_eq!(ra.summary, "S");
    assert_eq!(rb.summary, ERROR_SUMMARY);
    assert_eq!(ok.call_count(), 1);
    assert_eq!(bad.call_count(), 1);
}
