//! Slide and note generation for PaperDeck.
//!
//! - [`prompt::PromptBuilder`] — template selection, note placeholders, truncation
//! - [`generator::Generator`] — resolve → prompt → dispatch → normalize
//! - [`document`] — standalone HTML pages for slides and notes
//! - [`markdown`] — small Markdown → HTML converter used for notes

pub mod document;
pub mod generator;
pub mod markdown;
pub mod prompt;
pub mod templates;

pub use document::{wrap_notes_html, wrap_slides_html};
pub use generator::Generator;
pub use markdown::markdown_to_html;
pub use prompt::{PromptBuilder, MAX_SOURCE_CHARS};
