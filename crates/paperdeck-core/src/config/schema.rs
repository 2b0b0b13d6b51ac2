//! Settings schema — what PaperDeck persists between runs.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! Credentials, model, and base URL live in per-provider sections so that
//! switching the active provider never leaks another provider's key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};

// ─────────────────────────────────────────────
// Root settings
// ─────────────────────────────────────────────

/// Root settings — loaded from `~/.paperdeck/config.json` + env vars.
///
/// `provider`, `language` and `prompt` are kept as raw strings: unknown
/// values are tolerated here and resolved permissively later.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Active provider identifier (e.g. `"deepseek"`).
    pub provider: String,
    /// Output language: `"chinese"` or `"english"`.
    pub language: String,
    /// Slide prompt style: `"academic"`, `"simple"` or `"detailed"`.
    pub prompt: String,
    /// User note template with `{{title}}`-style placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_template: Option<String>,
    /// Per-provider credentials and overrides, keyed by provider identifier.
    pub providers: BTreeMap<String, ProviderSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: "deepseek".to_string(),
            language: "chinese".to_string(),
            prompt: "academic".to_string(),
            note_template: None,
            providers: BTreeMap::new(),
        }
    }
}

/// Stored values for a single provider.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSettings {
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProviderSettings {
    /// Whether this provider has an API key.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

// ─────────────────────────────────────────────
// Dotted key access
// ─────────────────────────────────────────────

/// A parsed settings key.
#[derive(Debug, PartialEq, Eq)]
enum Key<'a> {
    Provider,
    Language,
    Prompt,
    NoteTemplate,
    ProviderField { provider: String, field: &'a str },
}

fn parse_key(key: &str) -> Option<Key<'_>> {
    match key {
        "provider" => Some(Key::Provider),
        "language" => Some(Key::Language),
        "prompt" => Some(Key::Prompt),
        "noteTemplate" => Some(Key::NoteTemplate),
        _ => {
            let rest = key.strip_prefix("providers.")?;
            let (provider, field) = rest.rsplit_once('.')?;
            if provider.is_empty() || !matches!(field, "apiKey" | "model" | "baseUrl") {
                return None;
            }
            Some(Key::ProviderField {
                provider: provider.to_lowercase(),
                field,
            })
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl Settings {
    /// Whether `key` names a setting [`Settings::get`] and [`Settings::set`] understand.
    pub fn is_known_key(key: &str) -> bool {
        parse_key(key).is_some()
    }

    /// Stored values for `provider`, if any.
    pub fn provider_settings(&self, provider: &str) -> Option<&ProviderSettings> {
        self.providers.get(&provider.to_lowercase())
    }

    /// Mutable section for `provider`, created on first use.
    pub fn provider_settings_mut(&mut self, provider: &str) -> &mut ProviderSettings {
        self.providers.entry(provider.to_lowercase()).or_default()
    }

    /// Read a value by dotted key, e.g. `providers.gemini.model`.
    pub fn get(&self, key: &str) -> Option<String> {
        match parse_key(key)? {
            Key::Provider => Some(self.provider.clone()),
            Key::Language => Some(self.language.clone()),
            Key::Prompt => Some(self.prompt.clone()),
            Key::NoteTemplate => self.note_template.clone(),
            Key::ProviderField { provider, field } => {
                let section = self.provider_settings(&provider)?;
                match field {
                    "apiKey" => non_empty(&section.api_key),
                    "model" => section.model.clone(),
                    _ => section.base_url.clone(),
                }
            }
        }
    }

    /// Write a value by dotted key. An empty value clears optional fields.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed = parse_key(key)
            .ok_or_else(|| GenerationError::Configuration(format!("unknown settings key '{key}'")))?;
        match parsed {
            Key::Provider => self.provider = value.trim().to_lowercase(),
            Key::Language => self.language = value.trim().to_lowercase(),
            Key::Prompt => self.prompt = value.trim().to_lowercase(),
            Key::NoteTemplate => self.note_template = (!value.is_empty()).then(|| value.to_string()),
            Key::ProviderField { provider, field } => {
                let section = self.provider_settings_mut(&provider);
                match field {
                    "apiKey" => section.api_key = value.trim().to_string(),
                    "model" => section.model = non_empty(value),
                    _ => section.base_url = non_empty(value),
                }
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
