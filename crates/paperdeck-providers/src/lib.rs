//! LLM provider gateway for PaperDeck.
//!
//! # Architecture
//!
//! - [`registry`] — static specs for the 9 supported providers
//! - [`resolver::ConfigResolver`] — settings snapshot + registry defaults → `EffectiveConfig`
//! - [`traits::LlmProvider`] — dispatch trait
//! - [`http_provider::HttpProvider`] — OpenAI-compatible and Gemini requests over HTTP
//! - [`normalizer`] — envelope extraction and output cleanup

pub mod http_provider;
pub mod normalizer;
pub mod registry;
pub mod resolver;
pub mod traits;

// Re-export main types for convenience
pub use http_provider::{build_request, HttpProvider, REQUEST_TIMEOUT_SECS};
pub use registry::{ProviderSpec, PROVIDERS};
pub use resolver::ConfigResolver;
pub use traits::{LlmProvider, LlmRequestConfig};
