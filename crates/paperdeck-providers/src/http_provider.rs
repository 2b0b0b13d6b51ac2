//! HTTP request dispatcher for both provider families.
//!
//! Builds the family-specific request ([`build_request`]) and sends it with
//! `reqwest`. One attempt per call, no retries.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error};

use paperdeck_core::error::{GenerationError, Result};
use paperdeck_core::types::{
    ChatCompletionRequest, ChatMessage, EffectiveConfig, GeminiContent, GeminiGenerationConfig,
    GeminiPart, GeminiRequest, LlmRequest, ProviderFamily,
};

use crate::traits::{LlmProvider, LlmRequestConfig};

/// Ceiling for a whole request, connect through last body byte.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

// ─────────────────────────────────────────────
// Request construction
// ─────────────────────────────────────────────

/// Build the provider-specific HTTP request for `prompt`.
pub fn build_request(
    config: &EffectiveConfig,
    prompt: &str,
    params: &LlmRequestConfig,
) -> Result<LlmRequest> {
    let base = config.base_url.trim_end_matches('/');

    let (url, headers, body) = match config.family() {
        ProviderFamily::OpenAiCompatible => {
            let body = ChatCompletionRequest {
                model: config.model.clone(),
                messages: vec![ChatMessage::user(prompt)],
                max_tokens: params.max_tokens,
                temperature: params.temperature,
            };
            (
                format!("{base}/v1/chat/completions"),
                vec![
                    ("Content-Type".to_string(), "application/json".to_string()),
                    (
                        "Authorization".to_string(),
                        format!("Bearer {}", config.api_key),
                    ),
                ],
                serde_json::to_value(body),
            )
        }
        ProviderFamily::Gemini => {
            let body = GeminiRequest {
                contents: vec![GeminiContent {
                    parts: vec![GeminiPart {
                        text: prompt.to_string(),
                    }],
                }],
                generation_config: GeminiGenerationConfig {
                    max_output_tokens: params.max_tokens,
                    temperature: params.temperature,
                },
            };
            // The key travels only as a query parameter.
            (
                format!(
                    "{base}/v1beta/models/{}:generateContent?key={}",
                    config.model, config.api_key
                ),
                vec![("Content-Type".to_string(), "application/json".to_string())],
                serde_json::to_value(body),
            )
        }
    };

    let body = body.map_err(|e| GenerationError::Transport(format!("failed to encode request: {e}")))?;
    Ok(LlmRequest { url, headers, body })
}

// ─────────────────────────────────────────────
// HttpProvider
// ─────────────────────────────────────────────

/// Sends requests to any supported provider over HTTP.
pub struct HttpProvider {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    params: LlmRequestConfig,
    timeout: Duration,
}

impl std::fmt::Debug for HttpProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpProvider")
            .field("params", &self.params)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpProvider {
    /// Provider with the default 120 s timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(HttpProvider {
            client,
            params: LlmRequestConfig::default(),
            timeout,
        })
    }

    /// Override sampling parameters (builder pattern).
    pub fn with_params(mut self, params: LlmRequestConfig) -> Self {
        self.params = params;
        self
    }

    /// Map a transport error, keeping the API key (which may be in the URL) out of it.
    fn classify(&self, err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::Timeout(self.timeout.as_secs())
        } else {
            GenerationError::Transport(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl LlmProvider for HttpProvider {
    async fn send(&self, config: &EffectiveConfig, prompt: &str) -> Result<String> {
        let request = build_request(config, prompt, &self.params)?;
        let family = config.family();

        debug!(
            provider = %config.provider,
            family = family.label(),
            model = %config.model,
            prompt_chars = prompt.chars().count(),
            "Calling LLM"
        );

        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(request.body.to_string())
            .send()
            .await
            .map_err(|e| {
                let err = self.classify(e);
                error!(provider = %config.provider, error = %err, "HTTP request failed");
                err
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if status.as_u16() != 200 {
            error!(
                provider = %config.provider,
                status = %status,
                body = %body,
                "API error"
            );
            return Err(GenerationError::Http {
                status: status.as_u16(),
                body,
            });
        }

        debug!(
            provider = %config.provider,
            bytes = body.len(),
            "LLM response received"
        );
        Ok(body)
    }

    fn display_name(&self) -> &str {
        "HTTP"
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
