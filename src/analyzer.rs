//! Orchestration of one analysis: short-circuit, model call, validation,
//! fallback.
//!
//! `analyze` is the only entry point the rest of the application integrates
//! against and it never fails: every path terminates in a well-formed
//! [`AnalysisResult`]. The happy path lives in `run` as an explicit `Result`;
//! the public wrapper converts any error into the fixed fallback after
//! logging it for operator diagnosis. No retries, no partial results.

use crate::error::Result;
use crate::prompt::render_prompt;
use crate::providers::ReasonModel;
use crate::schema::{AnalysisRequest, AnalysisResult, parse_model_output};
use std::sync::Arc;
use tracing::{debug, warn};

/// Shown when the caller submits no usable reasons. Not an error; the model
/// is never invoked for an empty set.
pub const EMPTY_INPUT_SUMMARY: &str =
    "No cancellation reasons were provided. Enter at least one reason to analyze.";

/// Fixed fallback when the model call or its output validation fails.
pub const ERROR_SUMMARY: &str =
    "An error occurred while analyzing the cancellation reasons. Please try again.";
pub const ERROR_SUGGESTIONS: &str = "No suggestions could be generated.";

/// Stateless per-request analyzer over an injected text-model collaborator.
pub struct Analyzer {
    model: Arc<dyn ReasonModel>,
}

impl Analyzer {
    pub fn new(model: Arc<dyn ReasonModel>) -> Self {
        Self { model }
    }

    pub fn provider_name(&self) -> &str {
        self.model.name()
    }

    /// Analyze a reason sequence. Never returns an error to the caller.
    pub async fn analyze(&self, reasons: &[String]) -> AnalysisResult {
        let request = AnalysisRequest::new(reasons);
        if request.is_empty() {
            debug!("empty reason set, short-circuiting without model call");
            return AnalysisResult {
                summary: EMPTY_INPUT_SUMMARY.to_string(),
                suggestions: String::new(),
            };
        }

        match self.run(&request).await {
            Ok(result) => result,
            Err(e) => {
                warn!(provider = self.model.name(), error = %e, "analysis failed, returning fallback");
                AnalysisResult {
                    summary: ERROR_SUMMARY.to_string(),
                    suggestions: ERROR_SUGGESTIONS.to_string(),
                }
            }
        }
    }

    /// Happy path: render, invoke, validate. Any failure surfaces as `Err`
    /// and is mapped to the fallback by `analyze`.
    async fn run(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let prompt = render_prompt(request.reasons());
        debug!(
            reasons = request.reasons().len(),
            prompt_chars = prompt.len(),
            "invoking model"
        );
        let raw = self.model.complete(&prompt).await?;
        parse_model_output(&raw)
    }
}
