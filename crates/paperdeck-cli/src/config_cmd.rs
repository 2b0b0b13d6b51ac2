//! `paperdeck config` — read and write single settings by dotted key.
//!
//! - `paperdeck config get providers.gemini.model`
//! - `paperdeck config set providers.gemini.apiKey AIza...`
//! - `paperdeck config path`

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;

use paperdeck_core::config::{JsonFileStore, Settings, SettingsStore};
use paperdeck_providers::registry::find_by_name;

use crate::helpers::mask_secret;

// ─────────────────────────────────────────────
// Subcommand enum
// ─────────────────────────────────────────────

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print one setting
    Get {
        /// Dotted key, e.g. `provider` or `providers.kimi.model`
        key: String,

        /// Print API keys in full
        #[arg(long, default_value_t = false)]
        reveal: bool,
    },

    /// Change one setting (an empty value clears optional fields)
    Set {
        /// Dotted key, e.g. `language` or `providers.openai.apiKey`
        key: String,

        /// New value
        value: String,
    },

    /// Print the settings file path
    Path,
}

// ─────────────────────────────────────────────
// Dispatcher
// ─────────────────────────────────────────────

/// Dispatch a config subcommand.
pub fn dispatch(cmd: ConfigCommands, store: &JsonFileStore) -> Result<()> {
    match cmd {
        ConfigCommands::Get { key, reveal } => {
            match get_value(store, &key, reveal)? {
                Some(value) => println!("{value}"),
                None => println!("{}", "(not set)".dimmed()),
            }
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            if let Some(warning) = set_value(store, &key, &value)? {
                eprintln!("{} {}", "!".yellow(), warning);
            }
            println!("{} {} updated", "✓".green(), key.bold());
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
    }
}

/// Read a setting. API keys are masked unless `reveal` is set.
pub fn get_value(store: &dyn SettingsStore, key: &str, reveal: bool) -> Result<Option<String>> {
    if !Settings::is_known_key(key) {
        bail!("unknown settings key '{key}'");
    }

    Ok(store.load().get(key).map(|value| {
        if key.ends_with(".apiKey") && !reveal {
            mask_secret(&value)
        } else {
            value
        }
    }))
}

/// Write a setting and persist it.
///
/// Starts from the stored settings only, so env overrides are never written
/// to disk, and refuses to touch a settings file it cannot parse.
///
/// Returns a warning when the value is accepted but will not behave as the
/// user likely expects.
pub fn set_value(store: &dyn SettingsStore, key: &str, value: &str) -> Result<Option<String>> {
    let mut settings = store
        .load_for_update()
        .context("existing settings could not be read; fix or remove the file first")?;
    settings.set(key, value)?;
    store.save(&settings)?;

    let warning = match key {
        "provider" if find_by_name(value).is_none() => Some(format!(
            "unknown provider '{}', generation will fall back to deepseek",
            value.trim()
        )),
        "language" if !matches!(value.trim().to_lowercase().as_str(), "chinese" | "english" | "en") => {
            Some(format!("unknown language '{}', Chinese will be used", value.trim()))
        }
        "prompt" if !matches!(value.trim().to_lowercase().as_str(), "academic" | "simple" | "detailed") => {
            Some(format!("unknown prompt style '{}', academic will be used", value.trim()))
        }
        _ => None,
    };
    Ok(warning)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
