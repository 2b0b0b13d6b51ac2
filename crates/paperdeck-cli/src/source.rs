//! Plain-text documents read from disk.
//!
//! PDF extraction happens upstream (e.g. `pdftotext`); the CLI consumes the
//! resulting text file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use paperdeck_core::source::DocumentSource;
use paperdeck_core::types::DocumentMetadata;

/// A paper whose text lives in a UTF-8 file.
pub struct TextFileSource {
    path: PathBuf,
    metadata: DocumentMetadata,
}

impl TextFileSource {
    pub fn new(path: &Path, metadata: DocumentMetadata) -> Self {
        Self {
            path: path.to_path_buf(),
            metadata,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Title to show and to derive file names from: the given title, else the file stem.
    pub fn display_title(&self) -> String {
        if !self.metadata.title.trim().is_empty() {
            return self.metadata.title.trim().to_string();
        }
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "paper".to_string())
    }
}

#[async_trait]
impl DocumentSource for TextFileSource {
    async fn extract_text(&self) -> std::io::Result<String> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        if text.trim().is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("no text found in {}", self.path.display()),
            ));
        }
        Ok(text)
    }

    fn metadata(&self) -> DocumentMetadata {
        self.metadata.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_file_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.txt");
        std::fs::write(&path, "Abstract. We study things.").unwrap();

        let doc = TextFileSource::new(&path, DocumentMetadata::default());
        assert_eq!(doc.extract_text().await.unwrap(), "Abstract. We study things.");
    }

    #[tokio::test]
    async fn test_blank_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "  \n\n").unwrap();

        let err = TextFileSource::new(&path, DocumentMetadata::default())
            .extract_text()
            .await
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let doc = TextFileSource::new(Path::new("/nonexistent/paper.txt"), DocumentMetadata::default());
        assert!(doc.extract_text().await.is_err());
    }

    #[test]
    fn test_display_title_falls_back_to_stem() {
        let doc = TextFileSource::new(Path::new("/papers/attention.txt"), DocumentMetadata::default());
        assert_eq!(doc.display_title(), "attention");

        let titled = TextFileSource::new(
            Path::new("/papers/attention.txt"),
            DocumentMetadata {
                title: " Attention Is All You Need ".into(),
                ..Default::default()
            },
        );
        assert_eq!(titled.display_title(), "Attention Is All You Need");
    }
}
