//! Typed configuration loaded from cancel_insight.toml and environment variables

use crate::error::{InsightError, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure for the analysis service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// System-level configuration for the HTTP surface
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemConfig {
    pub bind_addr: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8787".to_string(),
        }
    }
}

/// Configuration for the generative-text provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// "openai" (any OpenAI-compatible chat endpoint) or "gemini_cli"
    pub kind: String,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
    pub temperature: f32,
    /// Path to the gemini executable when kind = "gemini_cli"
    pub gemini_path: String,
    /// Cap on bytes read back from the gemini CLI
    pub max_output_bytes: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout_ms: 30_000,
            temperature: 0.2,
            gemini_path: "gemini".to_string(),
            max_output_bytes: 1_000_000,
        }
    }
}

/// Runtime configuration from environment variables, never serialized
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub api_key: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration: cancel_insight.toml if present, then environment
    /// overrides on top.
    pub fn load() -> Result<Self> {
        let path = std::env::var("CANCEL_CONFIG_PATH")
            .unwrap_or_else(|_| "cancel_insight.toml".to_string());

        let mut config: Config = match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).map_err(|e| InsightError::Config {
                message: format!("failed to parse {}: {}", path, e),
            })?,
            Err(_) => Config {
                system: SystemConfig::default(),
                provider: ProviderConfig::default(),
                runtime: RuntimeConfig::default(),
            },
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("CANCEL_BIND_ADDR") {
            self.system.bind_addr = v;
        }
        if let Ok(v) = std::env::var("CANCEL_PROVIDER") {
            self.provider.kind = v;
        }
        if let Ok(v) = std::env::var("CANCEL_MODEL") {
            self.provider.model = v;
        }
        if let Ok(v) = std::env::var("CANCEL_BASE_URL") {
            self.provider.base_url = v;
        }
        if let Some(ms) = std::env::var("CANCEL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.provider.timeout_ms = ms;
        }
        if let Some(t) = std::env::var("CANCEL_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse::<f32>().ok())
        {
            self.provider.temperature = t.clamp(0.0, 2.0);
        }
        if let Ok(v) = std::env::var("CANCEL_GEMINI_PATH") {
            self.provider.gemini_path = v;
        }

        // Prefer a service-specific key, fall back to the provider's usual one
        self.runtime.api_key = std::env::var("CANCEL_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .or_else(|_| std::env::var("GROQ_API_KEY"))
            .ok();
        self.runtime.log_level = std::env::var("CANCEL_LOG").ok();
    }
}
