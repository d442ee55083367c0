use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, Paragraph};

use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;

/// Dispatches to the adapter registered for a document's content type.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF and DOCX adapters.
    pub fn with_default_adapters() -> Self {
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let docx: Arc<dyn FileLoader> = Arc::new(DocxAdapter::new());
        Self::new(vec![(ContentType::Pdf, pdf), (ContentType::Docx, docx)])
    }

    /// Resolves the content type from the filename alone. Anything that is
    /// not `.pdf` or `.docx` yields no paragraphs rather than an error.
    pub async fn load_by_filename(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<Vec<Paragraph>, FileLoaderError> {
        let Some(content_type) = ContentType::from_filename(filename) else {
            tracing::debug!(filename, "No extractor for extension, returning no paragraphs");
            return Ok(Vec::new());
        };

        let document = Document::new(filename.to_string(), content_type, data.len() as u64);
        self.extract_paragraphs(data, &document).await
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_paragraphs(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<Paragraph>, FileLoaderError> {
        let adapter = self.adapters.get(&document.content_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.content_type.as_mime().to_string())
        })?;

        adapter.extract_paragraphs(data, document).await
    }
}
