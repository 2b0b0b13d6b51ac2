//! Generation pipeline — prompt → dispatch → normalize.
//!
//! Configuration is resolved once per call, before anything is sent. A
//! failure at any step aborts the generation and propagates unchanged.

use std::sync::Arc;

use paperdeck_core::error::Result;
use paperdeck_core::types::{DocumentMetadata, EffectiveConfig, PromptTask};
use paperdeck_providers::normalizer;
use paperdeck_providers::{ConfigResolver, LlmProvider};
use tracing::{debug, info};

use crate::prompt::PromptBuilder;

/// Turns paper text into slides or notes through an [`LlmProvider`].
pub struct Generator {
    provider: Arc<dyn LlmProvider>,
    prompts: PromptBuilder,
}

impl Generator {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            prompts: PromptBuilder::default(),
        }
    }

    /// Replace the prompt builder (builder pattern).
    pub fn with_prompt_builder(mut self, prompts: PromptBuilder) -> Self {
        self.prompts = prompts;
        self
    }

    /// Generate a slide-section HTML fragment (not a full document).
    pub async fn generate_slides(&self, config: &EffectiveConfig, source_text: &str) -> Result<String> {
        self.generate(config, &PromptTask::Slides, source_text, None)
            .await
    }

    /// Generate Markdown notes following `note_template`.
    ///
    /// A blank template falls back to the built-in one for the configured language.
    pub async fn generate_notes(
        &self,
        config: &EffectiveConfig,
        source_text: &str,
        metadata: &DocumentMetadata,
        note_template: &str,
    ) -> Result<String> {
        let task = PromptTask::Notes {
            template: note_template.to_string(),
        };
        self.generate(config, &task, source_text, Some(metadata))
            .await
    }

    /// Resolve configuration, then generate slides.
    pub async fn run_slides(&self, resolver: &ConfigResolver, source_text: &str) -> Result<String> {
        let config = resolver.resolve()?;
        self.generate_slides(&config, source_text).await
    }

    /// Resolve configuration, then generate notes.
    pub async fn run_notes(
        &self,
        resolver: &ConfigResolver,
        source_text: &str,
        metadata: &DocumentMetadata,
        note_template: &str,
    ) -> Result<String> {
        let config = resolver.resolve()?;
        self.generate_notes(&config, source_text, metadata, note_template)
            .await
    }

    async fn generate(
        &self,
        config: &EffectiveConfig,
        task: &PromptTask,
        source_text: &str,
        metadata: Option<&DocumentMetadata>,
    ) -> Result<String> {
        let prompt = self.prompts.build(
            task,
            config.prompt_style,
            config.language,
            source_text,
            metadata,
        );

        info!(
            provider = %config.provider,
            model = %config.model,
            task = if task.is_slides() { "slides" } else { "notes" },
            "Generating"
        );

        let raw = self.provider.send(config, &prompt).await?;
        let response = normalizer::extract(&raw, config.family(), task)?;

        debug!(
            chars = response.extracted_text.chars().count(),
            via = self.provider.display_name(),
            "Generation complete"
        );
        Ok(response.extracted_text)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use paperdeck_core::config::{MemoryStore, Settings};
    use paperdeck_core::error::GenerationError;
    use paperdeck_core::types::{Language, PromptStyle, ProviderId};
    use paperdeck_providers::HttpProvider;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Records every call and answers with a fixed body.
    struct RecordingProvider {
        reply: String,
        calls: Mutex<Vec<(EffectiveConfig, String)>>,
        on_send: Option<Box<dyn Fn() + Send + Sync>>,
    }

    impl RecordingProvider {
        fn replying(reply: serde_json::Value) -> Self {
            Self {
                reply: reply.to_string(),
                calls: Mutex::new(Vec::new()),
                on_send: None,
            }
        }

        fn calls(&self) -> Vec<(EffectiveConfig, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for RecordingProvider {
        async fn send(&self, config: &EffectiveConfig, prompt: &str) -> Result<String> {
            if let Some(hook) = &self.on_send {
                hook();
            }
            self.calls
                .lock()
                .unwrap()
                .push((config.clone(), prompt.to_string()));
            Ok(self.reply.clone())
        }

        fn display_name(&self) -> &str {
            "recording"
        }
    }

    fn openai_reply(content: &str) -> serde_json::Value {
        json!({"choices": [{"message": {"content": content}}]})
    }

    fn config(provider: ProviderId, base_url: &str) -> EffectiveConfig {
        EffectiveConfig {
            provider,
            api_key: "key-1".into(),
            base_url: base_url.into(),
            model: "model-1".into(),
            language: Language::English,
            prompt_style: PromptStyle::Academic,
        }
    }

    fn store_with_key(provider: &str, key: &str) -> Arc<MemoryStore> {
        let mut settings = Settings::default();
        settings.provider = provider.into();
        settings.provider_settings_mut(provider).api_key = key.into();
        Arc::new(MemoryStore::new(settings))
    }

    #[tokio::test]
    async fn test_generate_slides_normalizes_output() {
        let provider = Arc::new(RecordingProvider::replying(openai_reply(
            "```html\n<section class=\"slide\"><h2>Intro</h2></section>\n```",
        )));
        let generator = Generator::new(provider.clone());

        let html = generator
            .generate_slides(&config(ProviderId::Deepseek, "http://unused"), "paper text")
            .await
            .unwrap();

        assert_eq!(html, "<section class=\"slide\"><h2>Intro</h2></section>");
        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].1.ends_with("Paper text:\n\npaper text"));
    }

    #[tokio::test]
    async fn test_generate_slides_wraps_plain_text() {
        let provider = Arc::new(RecordingProvider::replying(openai_reply("just some text")));
        let generator = Generator::new(provider);

        let html = generator
            .generate_slides(&config(ProviderId::Openai, "http://unused"), "x")
            .await
            .unwrap();

        assert_eq!(
            html,
            r#"<section class="slide"><div class="content">just some text</div></section>"#
        );
    }

    #[tokio::test]
    async fn test_generate_notes_fills_template_and_strips_fence() {
        let provider = Arc::new(RecordingProvider::replying(openai_reply(
            "```markdown\n# Notes\n- point\n```",
        )));
        let generator = Generator::new(provider.clone());
        let metadata = DocumentMetadata {
            title: "Deep Nets".into(),
            ..Default::default()
        };

        let notes = generator
            .generate_notes(
                &config(ProviderId::Kimi, "http://unused"),
                "body",
                &metadata,
                "# {{title}}\nBy {{authors}}",
            )
            .await
            .unwrap();

        assert_eq!(notes, "# Notes\n- point");
        let prompt = &provider.calls()[0].1;
        assert!(prompt.contains("# Deep Nets\nBy {{authors}}"));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_call() {
        let provider = Arc::new(RecordingProvider::replying(openai_reply("unused")));
        let generator = Generator::new(provider.clone());
        let store = Arc::new(MemoryStore::new(Settings::default()));
        let resolver = ConfigResolver::new(store);

        let err = generator.run_slides(&resolver, "text").await.unwrap_err();

        assert!(matches!(err, GenerationError::Configuration(_)));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_http_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut settings = Settings::default();
        settings.provider = "openai".into();
        settings.provider_settings_mut("openai").base_url = Some(mock_server.uri());
        let resolver = ConfigResolver::new(Arc::new(MemoryStore::new(settings)));
        let generator = Generator::new(Arc::new(HttpProvider::new().unwrap()));

        let err = generator.run_notes(&resolver, "t", &DocumentMetadata::default(), "").await;
        assert!(matches!(err, Err(GenerationError::Configuration(_))));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_settings_edited_mid_flight_are_not_observed() {
        let store = store_with_key("deepseek", "old-key");
        let editor = store.clone();
        let mut provider = RecordingProvider::replying(openai_reply("<section>x</section>"));
        provider.on_send = Some(Box::new(move || {
            editor.update(|s| s.provider_settings_mut("deepseek").api_key = "new-key".into());
        }));
        let provider = Arc::new(provider);
        let generator = Generator::new(provider.clone());
        let resolver = ConfigResolver::new(store.clone());

        generator.run_slides(&resolver, "text").await.unwrap();

        assert_eq!(provider.calls()[0].0.api_key, "old-key");
        assert_eq!(store.load_count(), 1);

        // The next call sees the edit
        generator.run_slides(&resolver, "text").await.unwrap();
        assert_eq!(provider.calls()[1].0.api_key, "new-key");
    }

    #[tokio::test]
    async fn test_empty_response_is_error() {
        let provider = Arc::new(RecordingProvider::replying(json!({"choices": []})));
        let generator = Generator::new(provider);

        let err = generator
            .generate_slides(&config(ProviderId::Zhipu, "http://unused"), "x")
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::EmptyContent(_)));
    }

    #[tokio::test]
    async fn test_end_to_end_gemini_over_http() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
            .and(query_param("key", "g-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "```html\n<section class=\"slide\">G</section>\n```"}]}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut settings = Settings::default();
        settings.provider = "gemini".into();
        settings.language = "english".into();
        let section = settings.provider_settings_mut("gemini");
        section.api_key = "g-key".into();
        section.base_url = Some(mock_server.uri());
        let resolver = ConfigResolver::new(Arc::new(MemoryStore::new(settings)));
        let generator = Generator::new(Arc::new(HttpProvider::new().unwrap()));

        let html = generator.run_slides(&resolver, "paper").await.unwrap();
        assert_eq!(html, "<section class=\"slide\">G</section>");
    }

    #[tokio::test]
    async fn test_http_error_propagates() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&mock_server)
            .await;

        let generator = Generator::new(Arc::new(HttpProvider::new().unwrap()));
        let err = generator
            .generate_slides(&config(ProviderId::Siliconflow, &mock_server.uri()), "x")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "API error: 401 - invalid api key");
    }
}
