//! Completion API configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Placeholder value shipped in sample .env files. A key equal to this
/// sentinel passes startup validation but disables the external integration.
pub const PLACEHOLDER_API_KEY: &str = "your-openai-api-key-here";

/// Completion API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key. Required at startup; the placeholder sentinel is
    /// accepted and yields fallback-only mode.
    pub openai_api_key: Option<String>,

    /// Model to request completions from
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL for the completion API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Single predicate for "is the external integration enabled".
    ///
    /// True when a key is configured, non-empty, and not the placeholder
    /// sentinel. Both endpoints and /health consult this one check.
    pub fn integration_enabled(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY)
    }

    /// Validate completion API configuration.
    ///
    /// The key itself must be present; the process fails fast without one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty()) {
            return Err(ValidationError::MissingRequired(
                "FOCUSGROUP__AI__OPENAI_API_KEY",
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}
