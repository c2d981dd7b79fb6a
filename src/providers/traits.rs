use anyhow::Result;
use async_trait::async_trait;

/// The external generative-text collaborator.
///
/// One call per analysis: takes the rendered prompt, returns the raw model
/// text. Implementations own their transport, timeout, and credentials; the
/// orchestrator treats any error identically and never retries.
#[async_trait]
pub trait ReasonModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Provider label for logs and the /info endpoint.
    fn name(&self) -> &str;
}
