//! OpenAI-compatible chat-completions provider.
//!
//! Works against api.openai.com or any compatible endpoint (Groq and friends)
//! by pointing `base_url` elsewhere. The request pins JSON output via
//! `response_format` so the schema validator downstream sees an object, not
//! prose.

use crate::config::ProviderConfig;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

pub struct OpenAiModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OpenAiModel {
    pub fn new(cfg: &ProviderConfig, api_key: Option<&str>) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow!("no API key set (CANCEL_API_KEY or OPENAI_API_KEY)"))?
            .to_string();
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(cfg.timeout_ms))
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            api_key,
            model: cfg.model.clone(),
            base_url: cfg.base_url.clone(),
            temperature: cfg.temperature,
        })
    }
}

#[async_trait]
impl super::traits::ReasonModel for OpenAiModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!(model = %self.model, chars = prompt.len(), "sending chat completion request");

        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": "You are a careful analyst. Respond only with the JSON object the user asks for."},
                {"role": "user", "content": prompt}
            ],
            "temperature": self.temperature,
            "response_format": {"type": "json_object"}
        });
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("chat completion send")?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow!("provider error {}: {}", status, text));
        }
        let v: Value = resp.json().await.context("parse completion response json")?;
        let content = v["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow!("completion response has no message content"))?;
        Ok(content.to_string())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
