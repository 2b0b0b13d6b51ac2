//! `paperdeck onboard` — initialize the settings file.
//!
//! - Creates `~/.paperdeck/config.json` with defaults (never overwrites)
//! - Points the user at the command for setting an API key

use anyhow::{Context, Result};
use colored::Colorize;

use paperdeck_core::config::{JsonFileStore, Settings, SettingsStore};

/// Write default settings unless the file already exists. Returns `true` when created.
pub fn ensure_settings(store: &JsonFileStore) -> Result<bool> {
    if store.path().exists() {
        return Ok(false);
    }
    store
        .save(&Settings::default())
        .with_context(|| format!("failed to write settings to {}", store.path().display()))?;
    Ok(true)
}

/// Run the onboard command.
pub fn run(store: &JsonFileStore) -> Result<()> {
    println!();
    println!("{}", "📑 PaperDeck — Setup".cyan().bold());
    println!();

    if ensure_settings(store)? {
        println!(
            "  {} created settings at {}",
            "✓".green(),
            store.path().display()
        );
    } else {
        println!(
            "  {} settings already exist at {}",
            "✓".green(),
            store.path().display()
        );
    }

    let settings = store.load();
    let provider = settings.provider.as_str();
    println!();
    println!("  Next, set an API key for {}:", provider.bold());
    println!(
        "    {}",
        format!("paperdeck config set providers.{provider}.apiKey <KEY>").cyan()
    );
    println!();
    println!(
        "{}",
        "  Then run `paperdeck slides paper.txt` to build a deck.".green()
    );
    println!();

    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_settings_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("config.json"));

        assert!(ensure_settings(&store).unwrap());

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw["provider"], "deepseek");
        assert_eq!(raw["language"], "chinese");
    }

    #[test]
    fn ensure_settings_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"provider":"gemini"}"#).unwrap();
        let store = JsonFileStore::new(&path);

        assert!(!ensure_settings(&store).unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"provider":"gemini"}"#
        );
    }
}
