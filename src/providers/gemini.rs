//! Gemini CLI provider.
//!
//! Spawns the `gemini` executable with the prompt on stdin and reads plain
//! text back. Useful where the service runs next to an already-authenticated
//! CLI and no HTTP key is configured.

use crate::config::ProviderConfig;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

pub struct GeminiCliModel {
    path: String,
    model: String,
    timeout_ms: u64,
    max_output_bytes: usize,
}

impl GeminiCliModel {
    pub fn new(cfg: &ProviderConfig) -> Self {
        Self {
            path: cfg.gemini_path.clone(),
            model: cfg.model.clone(),
            timeout_ms: cfg.timeout_ms,
            max_output_bytes: cfg.max_output_bytes,
        }
    }
}

#[async_trait]
impl super::traits::ReasonModel for GeminiCliModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, chars = prompt.len(), "spawning gemini cli");

        let mut cmd = Command::new(&self.path);
        cmd.args(["-m", &self.model, "-p", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        let mut child = cmd.spawn().context("spawn gemini cli")?;
        if let Some(mut stdin) = child.stdin.take() {
            use tokio::io::AsyncWriteExt;
            stdin
                .write_all(prompt.as_bytes())
                .await
                .context("write prompt to gemini stdin")?;
        }
        let timeout = tokio::time::Duration::from_millis(self.timeout_ms);
        let out = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .context("gemini cli timeout")?
            .context("gemini cli failed to run")?;
        if !out.status.success() {
            return Err(anyhow!("gemini exited non-zero: {}", out.status));
        }
        let mut stdout = out.stdout;
        if stdout.len() > self.max_output_bytes {
            stdout.truncate(self.max_output_bytes);
        }
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    fn name(&self) -> &str {
        "gemini_cli"
    }
}
