//! Core types for PaperDeck — the request-scoped data model and the two
//! provider wire formats.
//!
//! Everything here lives for one generation: built when slides or notes are
//! requested, dropped when the call returns.

use std::fmt;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// A supported LLM vendor/endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Deepseek,
    Openai,
    Gemini,
    Kimi,
    Doubao,
    Zhipu,
    Siliconflow,
    Openrouter,
    Custom,
}

impl ProviderId {
    /// Every provider, in display order.
    pub const ALL: [ProviderId; 9] = [
        ProviderId::Deepseek,
        ProviderId::Openai,
        ProviderId::Gemini,
        ProviderId::Kimi,
        ProviderId::Doubao,
        ProviderId::Zhipu,
        ProviderId::Siliconflow,
        ProviderId::Openrouter,
        ProviderId::Custom,
    ];

    /// Identifier as stored in settings (e.g. `"siliconflow"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::Deepseek => "deepseek",
            ProviderId::Openai => "openai",
            ProviderId::Gemini => "gemini",
            ProviderId::Kimi => "kimi",
            ProviderId::Doubao => "doubao",
            ProviderId::Zhipu => "zhipu",
            ProviderId::Siliconflow => "siliconflow",
            ProviderId::Openrouter => "openrouter",
            ProviderId::Custom => "custom",
        }
    }

    /// Parse a stored identifier. Case-insensitive, surrounding whitespace ignored.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }

    /// Which wire format this provider speaks.
    ///
    /// Only `gemini` uses Google's content-generation API; everything else,
    /// including `custom`, is treated as OpenAI-compatible.
    pub fn family(self) -> ProviderFamily {
        match self {
            ProviderId::Gemini => ProviderFamily::Gemini,
            _ => ProviderFamily::OpenAiCompatible,
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request/response JSON shape a provider follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderFamily {
    /// `POST {base}/v1/chat/completions` with Bearer auth.
    OpenAiCompatible,
    /// `POST {base}/v1beta/models/{model}:generateContent?key=...`.
    Gemini,
}

impl ProviderFamily {
    /// Human-readable label used in errors and logs.
    pub fn label(self) -> &'static str {
        match self {
            ProviderFamily::OpenAiCompatible => "OpenAI-compatible",
            ProviderFamily::Gemini => "Gemini",
        }
    }
}

// ─────────────────────────────────────────────
// Prompt selection
// ─────────────────────────────────────────────

/// Output language of the generated slides/notes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Chinese => "chinese",
            Language::English => "english",
        }
    }

    /// Parse a stored value, falling back to the default for anything unknown.
    pub fn from_name_lossy(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "english" | "en" => Language::English,
            _ => Language::Chinese,
        }
    }
}

/// Slide template flavour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    #[default]
    Academic,
    Simple,
    Detailed,
}

impl PromptStyle {
    pub const ALL: [PromptStyle; 3] = [
        PromptStyle::Academic,
        PromptStyle::Simple,
        PromptStyle::Detailed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PromptStyle::Academic => "academic",
            PromptStyle::Simple => "simple",
            PromptStyle::Detailed => "detailed",
        }
    }

    /// Parse a stored value; unknown styles become `academic`.
    pub fn from_name_lossy(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "simple" => PromptStyle::Simple,
            "detailed" => PromptStyle::Detailed,
            _ => PromptStyle::Academic,
        }
    }
}

/// What the model is asked to produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptTask {
    /// HTML `<section class="slide">` fragments.
    Slides,
    /// Markdown reading notes following a user-supplied template.
    Notes { template: String },
}

impl PromptTask {
    pub fn is_slides(&self) -> bool {
        matches!(self, PromptTask::Slides)
    }
}

/// Best-effort bibliographic metadata of the source document.
///
/// Any field may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: String,
}

// ─────────────────────────────────────────────
// Effective configuration
// ─────────────────────────────────────────────

/// Fully resolved settings for one LLM call.
///
/// Built once at call start from a single settings snapshot.
#[derive(Clone, PartialEq)]
pub struct EffectiveConfig {
    pub provider: ProviderId,
    /// Never empty: resolution fails before this struct exists otherwise.
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub language: Language,
    pub prompt_style: PromptStyle,
}

impl EffectiveConfig {
    pub fn family(&self) -> ProviderFamily {
        self.provider.family()
    }
}

impl fmt::Debug for EffectiveConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveConfig")
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("language", &self.language)
            .field("prompt_style", &self.prompt_style)
            .finish()
    }
}

// ─────────────────────────────────────────────
// Request / response
// ─────────────────────────────────────────────

/// A provider-specific HTTP request, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct LlmRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: serde_json::Value,
}

impl LlmRequest {
    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw provider envelope plus the normalized text extracted from it.
#[derive(Clone, Debug, PartialEq)]
pub struct LlmResponse {
    pub raw_envelope: String,
    pub extracted_text: String,
}

// ─────────────────────────────────────────────
// OpenAI-compatible wire format
// ─────────────────────────────────────────────

/// A single chat message (`{role, content}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `/v1/chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Response envelope from `/v1/chat/completions`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, if present.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
    }
}

// ─────────────────────────────────────────────
// Gemini wire format
// ─────────────────────────────────────────────

/// Request body for `:generateContent`.
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GeminiGenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
    pub temperature: f64,
}

/// Response envelope from `:generateContent`.
#[derive(Debug, Default, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponseContent {
    #[serde(default)]
    pub parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GeminiResponse {
    /// `candidates[0].content.parts[0].text`, if present.
    pub fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
