//! Configuration resolver — merges stored per-provider settings with
//! registry defaults into one [`EffectiveConfig`].

use std::sync::Arc;

use paperdeck_core::config::{Settings, SettingsStore};
use paperdeck_core::error::{GenerationError, Result};
use paperdeck_core::types::{EffectiveConfig, Language, PromptStyle};
use tracing::debug;

use crate::registry;

/// Resolves the effective configuration from an injected settings store.
#[derive(Clone)]
pub struct ConfigResolver {
    store: Arc<dyn SettingsStore>,
}

impl ConfigResolver {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Read one settings snapshot and resolve it.
    ///
    /// Fails with [`GenerationError::Configuration`] when the active provider
    /// has no API key. No network I/O happens here.
    pub fn resolve(&self) -> Result<EffectiveConfig> {
        resolve_settings(&self.store.load())
    }
}

/// Resolve an already-loaded settings snapshot.
pub fn resolve_settings(settings: &Settings) -> Result<EffectiveConfig> {
    let name = match settings.provider.trim() {
        "" => "deepseek".to_string(),
        other => other.to_lowercase(),
    };
    let spec = registry::resolve_provider(&name);

    // Keyed by the stored name, so each provider keeps its own credentials.
    let section = settings.provider_settings(&name).cloned().unwrap_or_default();
    if !section.is_configured() {
        return Err(GenerationError::missing_api_key(&name));
    }

    let base_url = match section.base_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => registry::base_url(&name, None),
    };
    let base_url = base_url.trim_end_matches('/').to_string();

    let model = match section.model.as_deref().map(str::trim) {
        Some(model) if !model.is_empty() => model.to_string(),
        _ => spec.default_model.to_string(),
    };

    let config = EffectiveConfig {
        provider: spec.id,
        api_key: section.api_key.trim().to_string(),
        base_url,
        model,
        language: Language::from_name_lossy(&settings.language),
        prompt_style: PromptStyle::from_name_lossy(&settings.prompt),
    };

    debug!(
        provider = spec.display_name,
        model = %config.model,
        base_url = %config.base_url,
        language = config.language.as_str(),
        style = config.prompt_style.as_str(),
        "Resolved LLM configuration"
    );

    Ok(config)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
