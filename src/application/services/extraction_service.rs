use std::io::Cursor;
use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractionResult, Paragraph, PipelineConfig};

use super::file_type_validator::{FileTypeError, FileTypeValidator};
use super::text_sanitizer::TextSanitizer;

/// Upload → validated type → paragraphs → sanitized paragraphs.
pub struct ExtractionService<F>
where
    F: FileLoader + ?Sized,
{
    file_loader: Arc<F>,
    validator: FileTypeValidator,
    sanitizer: TextSanitizer,
    config: Arc<PipelineConfig>,
}

impl<F> ExtractionService<F>
where
    F: FileLoader + ?Sized,
{
    pub fn new(file_loader: Arc<F>, config: Arc<PipelineConfig>) -> Self {
        Self {
            file_loader,
            validator: FileTypeValidator::new(Arc::clone(&config)),
            sanitizer: TextSanitizer::new(config.max_text_chars),
            config,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.config.max_upload_bytes
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn extract(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<ExtractionResult, ExtractionError> {
        let filename = filename.trim();
        if filename.is_empty() {
            return Err(ExtractionError::EmptyFilename);
        }

        if data.len() > self.config.max_upload_bytes {
            return Err(ExtractionError::FileTooLarge {
                size: data.len(),
                limit: self.config.max_upload_bytes,
            });
        }

        let content_type = self
            .validator
            .validate(filename, &mut Cursor::new(data))?;

        let document = Document::new(filename.to_string(), content_type, data.len() as u64);

        let raw = self
            .file_loader
            .extract_paragraphs(data, &document)
            .await?;

        let paragraphs: ExtractionResult = raw
            .into_iter()
            .filter_map(|p| Paragraph::new(self.sanitizer.sanitize(&p.text).into_string()))
            .collect();

        tracing::info!(
            document_id = %document.id.as_uuid(),
            content_type = document.content_type.as_mime(),
            paragraph_count = paragraphs.len(),
            "Document extraction complete"
        );

        Ok(paragraphs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("filename is empty")]
    EmptyFilename,
    #[error("file is {size} bytes, limit is {limit}")]
    FileTooLarge { size: usize, limit: usize },
    #[error(transparent)]
    InvalidFileType(#[from] FileTypeError),
    #[error("corrupt document: {0}")]
    CorruptDocument(String),
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}

impl From<FileLoaderError> for ExtractionError {
    fn from(error: FileLoaderError) -> Self {
        match error {
            FileLoaderError::CorruptDocument(msg) => Self::CorruptDocument(msg),
            FileLoaderError::UnsupportedContentType(mime) => Self::UnsupportedOperation(format!(
                "no extractor registered for {mime}"
            )),
            FileLoaderError::ExtractionFailed(msg) => Self::ExtractionFailed(msg),
        }
    }
}
