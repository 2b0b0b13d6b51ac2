//! Provider registry — static specs for the 9 supported LLM providers.
//!
//! Each `ProviderSpec` records the default API base and model for one
//! provider. Lookups by name are permissive: an unrecognized identifier
//! resolves to the `deepseek` entry instead of failing.

use paperdeck_core::types::{ProviderFamily, ProviderId};
use tracing::warn;

/// Default endpoint for the `custom` provider (a local Ollama-style server).
pub const LOCAL_INFERENCE_URL: &str = "http://localhost:11434";

// ─────────────────────────────────────────────
// ProviderSpec — static metadata for one provider
// ─────────────────────────────────────────────

/// Static specification describing one LLM provider.
#[derive(Clone, Debug)]
pub struct ProviderSpec {
    pub id: ProviderId,
    /// Human-readable name for logs. E.g. `"SiliconFlow"`.
    pub display_name: &'static str,
    /// API base without the `/v1/...` suffix.
    pub default_api_base: &'static str,
    /// Model used when none is stored for this provider.
    pub default_model: &'static str,
}

impl ProviderSpec {
    pub fn name(&self) -> &'static str {
        self.id.as_str()
    }

    pub fn family(&self) -> ProviderFamily {
        self.id.family()
    }
}

/// Complete list of supported providers. The first entry is the fallback.
pub static PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        id: ProviderId::Deepseek,
        display_name: "DeepSeek",
        default_api_base: "https://api.deepseek.com",
        default_model: "deepseek-chat",
    },
    ProviderSpec {
        id: ProviderId::Openai,
        display_name: "OpenAI",
        default_api_base: "https://api.openai.com",
        default_model: "gpt-4o-mini",
    },
    ProviderSpec {
        id: ProviderId::Gemini,
        display_name: "Gemini",
        default_api_base: "https://generativelanguage.googleapis.com",
        default_model: "gemini-1.5-flash",
    },
    // Moonshot (Kimi), mainland endpoint
    ProviderSpec {
        id: ProviderId::Kimi,
        display_name: "Kimi",
        default_api_base: "https://api.moonshot.cn",
        default_model: "moonshot-v1-8k",
    },
    // Volcengine Ark
    ProviderSpec {
        id: ProviderId::Doubao,
        display_name: "Doubao",
        default_api_base: "https://ark.cn-beijing.volces.com/api",
        default_model: "doubao-pro-4k",
    },
    ProviderSpec {
        id: ProviderId::Zhipu,
        display_name: "ZhiPu",
        default_api_base: "https://open.bigmodel.cn/api/paas",
        default_model: "glm-4-flash",
    },
    ProviderSpec {
        id: ProviderId::Siliconflow,
        display_name: "SiliconFlow",
        default_api_base: "https://api.siliconflow.cn",
        default_model: "deepseek-ai/DeepSeek-V3",
    },
    ProviderSpec {
        id: ProviderId::Openrouter,
        display_name: "OpenRouter",
        default_api_base: "https://openrouter.ai/api",
        default_model: "openai/gpt-4o-mini",
    },
    ProviderSpec {
        id: ProviderId::Custom,
        display_name: "Custom",
        default_api_base: LOCAL_INFERENCE_URL,
        default_model: "llama3",
    },
];

// ─────────────────────────────────────────────
// Lookup functions
// ─────────────────────────────────────────────

/// Spec for a known provider id.
pub fn spec_for(id: ProviderId) -> &'static ProviderSpec {
    PROVIDERS
        .iter()
        .find(|spec| spec.id == id)
        .unwrap_or(&PROVIDERS[0])
}

/// Find a provider spec by exact (case-insensitive) name.
pub fn find_by_name(name: &str) -> Option<&'static ProviderSpec> {
    ProviderId::parse(name).map(spec_for)
}

/// Find a provider spec by name, falling back to `deepseek` for unknown names.
pub fn resolve_provider(name: &str) -> &'static ProviderSpec {
    find_by_name(name).unwrap_or_else(|| {
        warn!(provider = name, "Unknown provider, falling back to deepseek defaults");
        spec_for(ProviderId::Deepseek)
    })
}

/// API base URL for `provider`.
///
/// `custom_override` only applies to the `custom` provider, which otherwise
/// points at [`LOCAL_INFERENCE_URL`].
pub fn base_url(provider: &str, custom_override: Option<&str>) -> String {
    let spec = resolve_provider(provider);
    match (spec.id, custom_override.map(str::trim)) {
        (ProviderId::Custom, Some(url)) if !url.is_empty() => url.to_string(),
        _ => spec.default_api_base.to_string(),
    }
}

/// Default model for `provider`.
pub fn default_model(provider: &str) -> &'static str {
    resolve_provider(provider).default_model
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
