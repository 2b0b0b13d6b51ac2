//! LLM provider trait — the dispatch seam between generation and HTTP.
//!
//! `HttpProvider` in `http_provider.rs` is the real implementation; tests
//! substitute recording fakes.

use async_trait::async_trait;
use paperdeck_core::error::Result;
use paperdeck_core::types::EffectiveConfig;

/// Sampling parameters sent with every call.
#[derive(Clone, Debug)]
pub struct LlmRequestConfig {
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature (0.0 – 2.0).
    pub temperature: f64,
}

impl Default for LlmRequestConfig {
    fn default() -> Self {
        Self {
            max_tokens: 4000,
            temperature: 0.7,
        }
    }
}

/// Trait that all LLM providers must implement.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send `prompt` as a single user turn and return the raw response body.
    ///
    /// # Errors
    /// `Http` on a non-200 status, `Timeout` past the ceiling, `Transport`
    /// for anything else that prevents a response.
    async fn send(&self, config: &EffectiveConfig, prompt: &str) -> Result<String>;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}
