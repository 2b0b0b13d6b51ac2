//! `paperdeck status` — show configuration and provider status.
//!
//! - Shows settings path, active provider, language and prompt style
//! - Shows API key status and effective model for each provider

use anyhow::Result;
use colored::Colorize;

use paperdeck_core::config::{JsonFileStore, Settings, SettingsStore};
use paperdeck_core::types::{Language, PromptStyle};
use paperdeck_providers::registry::{resolve_provider, PROVIDERS};

/// Row for the provider table.
pub struct ProviderRow {
    pub display_name: &'static str,
    pub active: bool,
    pub configured: bool,
    pub model: String,
}

/// One row per registered provider, in registry order.
pub fn provider_rows(settings: &Settings) -> Vec<ProviderRow> {
    let active = resolve_provider(&settings.provider).id;
    PROVIDERS
        .iter()
        .map(|spec| {
            let section = settings.provider_settings(spec.name());
            ProviderRow {
                display_name: spec.display_name,
                active: spec.id == active,
                configured: section.is_some_and(|s| s.is_configured()),
                model: section
                    .and_then(|s| s.model.clone())
                    .unwrap_or_else(|| spec.default_model.to_string()),
            }
        })
        .collect()
}

/// Run the status command.
pub fn run(store: &JsonFileStore) -> Result<()> {
    let settings = store.load();
    let config_path = store.path();

    println!();
    println!("{}", "📑 PaperDeck Status".cyan().bold());
    println!();

    println!(
        "  {:<18} {} {}",
        "Settings:".bold(),
        config_path.display(),
        if config_path.exists() {
            "✓".green().to_string()
        } else {
            "(not found, run `paperdeck onboard`)".red().to_string()
        }
    );
    println!("  {:<18} {}", "Provider:".bold(), settings.provider);
    println!(
        "  {:<18} {}",
        "Language:".bold(),
        Language::from_name_lossy(&settings.language).as_str()
    );
    println!(
        "  {:<18} {}",
        "Prompt style:".bold(),
        PromptStyle::from_name_lossy(&settings.prompt).as_str()
    );
    println!(
        "  {:<18} {}",
        "Note template:".bold(),
        if settings.note_template.is_some() {
            "custom".to_string()
        } else {
            "default".dimmed().to_string()
        }
    );

    println!();
    println!("  {}", "Providers:".bold());
    for row in provider_rows(&settings) {
        let marker = if row.active { "→".cyan().to_string() } else { " ".to_string() };
        let status = if row.configured {
            format!("{} (key set)", "✓".green())
        } else {
            format!("{}", "· not configured".dimmed())
        };
        println!(
            "  {} {:<14} {:<28} {}",
            marker,
            row.display_name,
            row.model.dimmed(),
            status
        );
    }
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
    fn test_rows_cover_every_provider() {
        let rows = provider_rows(&Settings::default());
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|r| !r.configured));
        // Default provider is deepseek
        assert!(rows[0].active);
        assert_eq!(rows.iter().filter(|r| r.active).count(), 1);
    }

    #[test]
    fn test_rows_reflect_stored_sections() {
        let mut settings = Settings::default();
        settings.set("provider", "gemini").unwrap();
        settings.set("providers.gemini.apiKey", "g-key").unwrap();
        settings.set("providers.gemini.model", "gemini-2.0-flash").unwrap();

        let rows = provider_rows(&settings);
        let gemini = rows.iter().find(|r| r.display_name == "Gemini").unwrap();
        assert!(gemini.active);
        assert!(gemini.configured);
        assert_eq!(gemini.model, "gemini-2.0-flash");

        let kimi = rows.iter().find(|r| r.display_name == "Kimi").unwrap();
        assert!(!kimi.active);
        assert_eq!(kimi.model, "moonshot-v1-8k");
    }

    #[test]
    fn test_unknown_provider_marks_fallback_active() {
        let mut settings = Settings::default();
        settings.provider = "mystery".into();
        let rows = provider_rows(&settings);
        assert!(rows[0].active);
    }

    #[test]
    fn test_run_with_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("config.json"));
        assert!(run(&store).is_ok());
    }
}
