//! `paperdeck slides` / `paperdeck notes` — run one generation and save the result.
//!
//! Settings are snapshotted once per job. Nothing is written when any step fails.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use paperdeck_core::config::SettingsStore;
use paperdeck_core::source::DocumentSource;
use paperdeck_core::utils::{safe_filename, today_date};
use paperdeck_generator::{wrap_notes_html, wrap_slides_html, Generator};
use paperdeck_providers::resolver::resolve_settings;
use paperdeck_providers::{HttpProvider, LlmProvider};

use crate::helpers;
use crate::source::TextFileSource;

/// One generation run against a settings store.
pub struct Job {
    store: Arc<dyn SettingsStore>,
    generator: Generator,
    output: Option<PathBuf>,
}

impl Job {
    /// Job that talks to the configured provider over HTTP.
    pub fn new(store: Arc<dyn SettingsStore>, output: Option<PathBuf>) -> Result<Self> {
        let provider = HttpProvider::new().context("failed to create HTTP client")?;
        Ok(Self::with_provider(store, output, Arc::new(provider)))
    }

    pub fn with_provider(
        store: Arc<dyn SettingsStore>,
        output: Option<PathBuf>,
        provider: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            store,
            generator: Generator::new(provider),
            output,
        }
    }

    /// Generate slides and write a standalone HTML deck. Returns the written path.
    pub async fn slides(&self, doc: &TextFileSource) -> Result<PathBuf> {
        let config = resolve_settings(&self.store.load())?;
        let text = read_text(doc).await?;
        let title = doc.display_title();

        helpers::print_progress(&format!(
            "Generating slides with {} ({})...",
            config.provider, config.model
        ));
        let result = self.generator.generate_slides(&config, &text).await;
        helpers::clear_progress();

        let html = wrap_slides_html(&result?, &title);
        let path = self.output_path(doc, &title, "slides", "html");
        write_output(&path, &html).await?;
        Ok(path)
    }

    /// Generate notes and write them as Markdown, or as HTML when `html` is set.
    ///
    /// `template` overrides the stored `noteTemplate`.
    pub async fn notes(
        &self,
        doc: &TextFileSource,
        template: Option<String>,
        html: bool,
    ) -> Result<PathBuf> {
        let settings = self.store.load();
        let config = resolve_settings(&settings)?;
        let template = template
            .or_else(|| settings.note_template.clone())
            .unwrap_or_default();
        let text = read_text(doc).await?;
        let title = doc.display_title();

        helpers::print_progress(&format!(
            "Generating notes with {} ({})...",
            config.provider, config.model
        ));
        let result = self
            .generator
            .generate_notes(&config, &text, &doc.metadata(), &template)
            .await;
        helpers::clear_progress();
        let notes = result?;

        let (content, ext) = if html {
            (wrap_notes_html(&notes, &title), "html")
        } else {
            (format!("{notes}\n"), "md")
        };
        let path = self.output_path(doc, &title, "notes", ext);
        write_output(&path, &content).await?;
        Ok(path)
    }

    fn output_path(&self, doc: &TextFileSource, title: &str, kind: &str, ext: &str) -> PathBuf {
        if let Some(path) = &self.output {
            return path.clone();
        }
        let dir = doc.path().parent().unwrap_or(Path::new("."));
        dir.join(format!(
            "{}-{kind}-{}.{ext}",
            safe_filename(title),
            today_date()
        ))
    }
}

/// Read a note template file.
pub fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read note template {}", path.display()))
}

async fn read_text(doc: &TextFileSource) -> Result<String> {
    doc.extract_text()
        .await
        .with_context(|| format!("failed to extract text from {}", doc.path().display()))
}

async fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = content.len(), "Saved output");
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
