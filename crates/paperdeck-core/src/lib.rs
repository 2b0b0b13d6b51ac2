//! PaperDeck core — data model, error taxonomy, settings, and utilities.
//!
//! Shared by the provider gateway, the generator, and the CLI.

pub mod config;
pub mod error;
pub mod source;
pub mod types;
pub mod utils;

pub use error::{GenerationError, Result};
pub use types::{
    DocumentMetadata, EffectiveConfig, Language, LlmRequest, LlmResponse, PromptStyle,
    PromptTask, ProviderFamily, ProviderId,
};
