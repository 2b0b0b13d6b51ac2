//! Source documents — the text-extraction seam.
//!
//! PDF parsing is not done here. The host supplies a [`DocumentSource`] that
//! knows how to pull text and metadata out of whatever it manages.

use async_trait::async_trait;

use crate::types::DocumentMetadata;

/// A document the host can extract text from.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Full text of the document.
    ///
    /// Fails when no text can be extracted (e.g. scanned images only).
    async fn extract_text(&self) -> std::io::Result<String>;

    /// Best-effort bibliographic metadata. Fields may be empty.
    fn metadata(&self) -> DocumentMetadata;
}

/// In-memory document, handy for tests and for piping text in directly.
#[derive(Clone, Debug, Default)]
pub struct StaticDocument {
    pub text: String,
    pub metadata: DocumentMetadata,
}

impl StaticDocument {
    pub fn new(text: impl Into<String>, metadata: DocumentMetadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }
}

#[async_trait]
impl DocumentSource for StaticDocument {
    async fn extract_text(&self) -> std::io::Result<String> {
        if self.text.trim().is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "document has no extractable text",
            ));
        }
        Ok(self.text.clone())
    }

    fn metadata(&self) -> DocumentMetadata {
        self.metadata.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_document_returns_text() {
        let doc = StaticDocument::new("Abstract: we study things.", DocumentMetadata::default());
        assert_eq!(doc.extract_text().await.unwrap(), "Abstract: we study things.");
    }

    #[tokio::test]
    async fn test_static_document_blank_text_fails() {
        let doc = StaticDocument::new("   \n", DocumentMetadata::default());
        let err = doc.extract_text().await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_static_document_metadata() {
        let meta = DocumentMetadata {
            title: "Attention".into(),
            year: "2017".into(),
            ..Default::default()
        };
        let doc = StaticDocument::new("x", meta.clone());
        assert_eq!(doc.metadata(), meta);
    }
}
