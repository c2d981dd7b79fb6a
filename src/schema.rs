//! Data contracts for the analysis flow and the output-side schema validator.
//!
//! The model response is the one untrusted boundary in this service. Whatever
//! comes back is parsed and structurally checked here before anything
//! downstream is allowed to see it: a well-formed result has exactly two
//! string fields, `summary` and `suggestions`. Anything else is rejected
//! whole; a malformed response is never partially accepted or repaired.

use crate::error::{InsightError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single analysis request: an ordered reason sequence, immutable once
/// constructed. Blank entries are dropped at construction so the orchestrator
/// only has to ask `is_empty` to detect the degenerate case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    reasons: Vec<String>,
}

impl AnalysisRequest {
    /// Build a request from an arbitrary string sequence, trimming entries
    /// and dropping blanks. Order and duplicates are preserved.
    pub fn new(reasons: &[String]) -> Self {
        let reasons = reasons
            .iter()
            .map(|r| r.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect();
        Self { reasons }
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Structured output of one analysis. Both fields are always present;
/// `suggestions` is empty only in the degenerate no-input case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub suggestions: String,
}

/// Parse and validate a raw model response into an [`AnalysisResult`].
///
/// Markdown code fences around the JSON body are stripped first (models fence
/// their output more often than not); that is transport cleanup, not schema
/// repair. After parsing, the value must be an object carrying exactly the
/// `summary` and `suggestions` string fields.
pub fn parse_model_output(text: &str) -> Result<AnalysisResult> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| InsightError::Validation {
            message: format!("model output is not valid JSON: {}", e),
        })?;

    validate_result_shape(&value)
}

/// Structural check of a candidate result value.
fn validate_result_shape(value: &Value) -> Result<AnalysisResult> {
    let obj = value.as_object().ok_or_else(|| InsightError::Validation {
        message: "model output is not a JSON object".to_string(),
    })?;

    let summary = obj
        .get("summary")
        .and_then(|v| v.as_str())
        .ok_or_else(|| InsightError::Validation {
            message: "model output is missing string field 'summary'".to_string(),
        })?;
    let suggestions = obj
        .get("suggestions")
        .and_then(|v| v.as_str())
        .ok_or_else(|| InsightError::Validation {
            message: "model output is missing string field 'suggestions'".to_string(),
        })?;

    if let Some(extra) = obj.keys().find(|k| *k != "summary" && *k != "suggestions") {
        return Err(InsightError::Validation {
            message: format!("model output has unexpected field '{}'", extra),
        });
    }

    Ok(AnalysisResult {
        summary: summary.to_string(),
        suggestions: suggestions.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_drops_blanks_keeps_order_and_duplicates() {
        let req = AnalysisRequest::new(&[
            "A".to_string(),
            "  ".to_string(),
            "B".to_string(),
            "A".to_string(),
        ]);
        assert_eq!(req.reasons(), ["A", "B", "A"]);
    }

    #[test]
    fn test_request_all_blank_is_empty() {
        let req = AnalysisRequest::new(&["".to_string(), "   ".to_string(), "\n".to_string()]);
        assert!(req.is_empty());
    }

    #[test]
    fn test_parse_valid_output() {
        let out = parse_model_output(r#"{"summary": "S", "suggestions": "T"}"#).unwrap();
        assert_eq!(out.summary, "S");
        assert_eq!(out.suggestions, "T");
    }

    #[test]
    fn test_parse_fenced_output() {
        let out =
            parse_model_output("```json\n{\"summary\": \"S\", \"suggestions\": \"T\"}\n```")
                .unwrap();
        assert_eq!(out.summary, "S");
    }

    #[test]
    fn test_parse_rejects_missing_suggestions() {
        let res = parse_model_output(r#"{"summary": "S"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_rejects_non_string_field() {
        let res = parse_model_output(r#"{"summary": "S", "suggestions": 42}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_rejects_extra_field() {
        let res = parse_model_output(r#"{"summary": "S", "suggestions": "T", "extra": "x"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(parse_model_output(r#"["S", "T"]"#).is_err());
        assert!(parse_model_output("not json at all").is_err());
    }
}
