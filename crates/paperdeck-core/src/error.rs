//! Error taxonomy for a single slide/note generation.
//!
//! None of these are retried. The orchestrator shows the message verbatim
//! and aborts without saving anything.

use thiserror::Error;

/// Errors surfaced by configuration resolution, dispatch, and extraction.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Missing or invalid settings. Always reported before any network I/O.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The provider answered with a non-200 status.
    #[error("API error: {status} - {body}")]
    Http { status: u16, body: String },

    /// No response within the timeout ceiling.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// 200 response, but the envelope carried no text.
    #[error("no content in {0} response")]
    EmptyContent(&'static str),

    /// 200 response whose body is not the expected JSON envelope.
    #[error("malformed {family} response: {reason}")]
    MalformedResponse {
        family: &'static str,
        reason: String,
    },

    /// Connection refused, DNS failure, TLS error, ...
    #[error("error calling LLM: {0}")]
    Transport(String),
}

impl GenerationError {
    /// Shorthand for the most common configuration failure.
    pub fn missing_api_key(provider: &str) -> Self {
        GenerationError::Configuration(format!(
            "missing API key for provider '{provider}'. \
             Set it with `paperdeck config set providers.{provider}.apiKey <KEY>`"
        ))
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
