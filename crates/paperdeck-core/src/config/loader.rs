//! Settings loader — reads `~/.paperdeck/config.json`, merges env vars, and
//! applies legacy migrations.
//!
//! # Loading precedence
//! 1. Defaults (from `Settings::default()`)
//! 2. JSON file at `~/.paperdeck/config.json`
//! 3. Environment variables `PAPERDECK_<FIELD>` / `PAPERDECK_PROVIDERS__<NAME>__<FIELD>`

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::{ProviderSettings, Settings};
use crate::types::ProviderId;

/// Default settings file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load settings from `path` (or the default path) + env vars.
///
/// Falls back to `Settings::default()` if the file doesn't exist or can't be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);
    apply_env_overrides(load_settings_from_path(&config_path))
}

/// Load settings from a specific file, without env overrides.
fn load_settings_from_path(path: &Path) -> Settings {
    if !path.exists() {
        info!("No settings file found at {}, using defaults", path.display());
        return Settings::default();
    }

    debug!("Loading settings from {}", path.display());

    match load_persisted(path) {
        Ok(s) => s,
        Err(e) => {
            warn!("Failed to load settings file {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Load exactly what is stored at `path`: no env overrides, legacy migration applied.
///
/// A missing file yields defaults. An unreadable or malformed file is an
/// error, so a read-modify-write never replaces it with defaults.
pub fn load_persisted(path: &Path) -> std::io::Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    let mut raw: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    migrate_settings(&mut raw);

    serde_json::from_value(raw).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// Save settings to disk (pretty-printed JSON with camelCase keys).
pub fn save_settings(settings: &Settings, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    std::fs::write(&config_path, json)?;
    debug!("Settings saved to {}", config_path.display());
    Ok(())
}

/// Apply legacy migrations.
///
/// Older files stored a single `apiKey` / `model` / `baseUrl` at the top
/// level, shared by every provider. These move into the active provider's
/// section unless that section already has a value.
fn migrate_settings(raw: &mut serde_json::Value) {
    let Some(root) = raw.as_object_mut() else {
        return;
    };

    let provider = root
        .get("provider")
        .and_then(|v| v.as_str())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "deepseek".to_string());

    for field in ["apiKey", "model", "baseUrl"] {
        let Some(value) = root.remove(field) else {
            continue;
        };
        if value.as_str().map_or(true, str::is_empty) {
            continue;
        }

        let providers = root
            .entry("providers")
            .or_insert_with(|| serde_json::json!({}));
        let Some(providers) = providers.as_object_mut() else {
            continue;
        };
        let section = providers
            .entry(provider.clone())
            .or_insert_with(|| serde_json::json!({}));
        let Some(section) = section.as_object_mut() else {
            continue;
        };

        let occupied = section
            .get(field)
            .and_then(|v| v.as_str())
            .is_some_and(|s| !s.is_empty());
        if !occupied {
            section.insert(field.to_string(), value);
            debug!("Migrated top-level {field} → providers.{provider}.{field}");
        }
    }
}

/// Apply environment variable overrides on top of loaded settings.
///
/// Supported overrides:
/// - `PAPERDECK_PROVIDER` → `provider`
/// - `PAPERDECK_LANGUAGE` → `language`
/// - `PAPERDECK_PROMPT` → `prompt`
/// - `PAPERDECK_PROVIDERS__<NAME>__API_KEY` → `providers.<name>.apiKey`
/// - `PAPERDECK_PROVIDERS__<NAME>__MODEL` → `providers.<name>.model`
/// - `PAPERDECK_PROVIDERS__<NAME>__BASE_URL` → `providers.<name>.baseUrl`
fn apply_env_overrides(mut settings: Settings) -> Settings {
    if let Ok(val) = std::env::var("PAPERDECK_PROVIDER") {
        settings.provider = val.trim().to_lowercase();
    }
    if let Ok(val) = std::env::var("PAPERDECK_LANGUAGE") {
        settings.language = val.trim().to_lowercase();
    }
    if let Ok(val) = std::env::var("PAPERDECK_PROMPT") {
        settings.prompt = val.trim().to_lowercase();
    }

    for id in ProviderId::ALL {
        let name = id.as_str();
        let upper = name.to_uppercase();
        let has_override = ["API_KEY", "MODEL", "BASE_URL"]
            .iter()
            .any(|f| std::env::var(format!("PAPERDECK_PROVIDERS__{upper}__{f}")).is_ok());
        if has_override {
            apply_provider_env(settings.provider_settings_mut(name), &upper);
        }
    }

    settings
}

/// Apply env var overrides for a single provider.
fn apply_provider_env(provider: &mut ProviderSettings, name: &str) {
    if let Ok(val) = std::env::var(format!("PAPERDECK_PROVIDERS__{name}__API_KEY")) {
        provider.api_key = val;
    }
    if let Ok(val) = std::env::var(format!("PAPERDECK_PROVIDERS__{name}__MODEL")) {
        provider.model = Some(val);
    }
    if let Ok(val) = std::env::var(format!("PAPERDECK_PROVIDERS__{name}__BASE_URL")) {
        provider.base_url = Some(val);
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
