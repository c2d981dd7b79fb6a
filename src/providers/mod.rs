pub mod gemini;
pub mod openai;
pub mod traits;

pub use gemini::GeminiCliModel;
pub use openai::OpenAiModel;
pub use traits::ReasonModel;

use crate::config::Config;
use crate::error::{InsightError, Result};
use std::sync::Arc;
use tracing::info;

/// Build the configured provider. This is the only place provider selection
/// happens; everything downstream receives an injected `Arc<dyn ReasonModel>`.
pub fn create_model(config: &Config) -> Result<Arc<dyn ReasonModel>> {
    match config.provider.kind.as_str() {
        "openai" => {
            let model = OpenAiModel::new(&config.provider, config.runtime.api_key.as_deref())
                .map_err(|e| InsightError::Config {
                    message: e.to_string(),
                })?;
            info!(model = %config.provider.model, "using OpenAI-compatible provider");
            Ok(Arc::new(model))
        }
        "gemini_cli" => {
            info!(model = %config.provider.model, "using gemini CLI provider");
            Ok(Arc::new(GeminiCliModel::new(&config.provider)))
        }
        other => Err(InsightError::Config {
            message: format!("unknown provider kind '{}'", other),
        }),
    }
}
