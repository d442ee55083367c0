use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, Paragraph};

use super::text_normalizer::{normalize_page_text, split_paragraphs};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
const EOF_MARKER: &[u8] = b"%%EOF";
const TRAILER_WINDOW_BYTES: usize = 1024;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// A file cut short loses its `%%EOF` trailer; pdf_oxide would otherwise
    /// recover it as blank pages.
    fn check_trailer(data: &[u8]) -> Result<(), FileLoaderError> {
        let tail = &data[data.len().saturating_sub(TRAILER_WINDOW_BYTES)..];
        if tail.windows(EOF_MARKER.len()).any(|w| w == EOF_MARKER) {
            Ok(())
        } else {
            Err(FileLoaderError::CorruptDocument(
                "PDF has no %%EOF trailer, file is truncated".to_string(),
            ))
        }
    }

    /// Pages that fail to extract are skipped; a document that cannot be
    /// opened at all is corrupt.
    fn extract_pages(path: &Path) -> Result<Vec<String>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::CorruptDocument(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::CorruptDocument(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) if !text.trim().is_empty() => pages.push(text),
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(page = page_index + 1, error = %e, "Skipping unreadable page");
                }
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_paragraphs(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<Paragraph>, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        Self::check_trailer(data)?;

        // One temp file per request; nothing is shared between concurrent parses.
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let page_count = pages.len();

        let paragraphs: Vec<Paragraph> = pages
            .iter()
            .map(|page| normalize_page_text(page))
            .flat_map(|page| {
                split_paragraphs(&page)
                    .filter_map(Paragraph::new)
                    .collect::<Vec<_>>()
            })
            .collect();

        tracing::info!(
            page_count,
            paragraph_count = paragraphs.len(),
            "PDF text extraction complete"
        );

        Ok(paragraphs)
    }
}
