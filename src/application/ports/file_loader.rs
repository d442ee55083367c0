use async_trait::async_trait;

use crate::domain::{Document, Paragraph};

/// Turns the bytes of a validated document into paragraphs in document order.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_paragraphs(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<Paragraph>, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("corrupt document: {0}")]
    CorruptDocument(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
