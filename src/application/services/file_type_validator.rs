use std::io::{Read, Seek, SeekFrom};
use std::sync::Arc;

use crate::domain::{ContentType, DOCX_MIME, PDF_MIME, PipelineConfig, file_extension};

const PDF_MAGIC: &[u8] = b"%PDF-";
const ZIP_LOCAL_HEADER_MAGIC: &[u8] = b"PK\x03\x04";
const WORD_PART_PREFIX: &[u8] = b"word/";
const ZIP_MIME: &str = "application/zip";
const OCTET_STREAM_MIME: &str = "application/octet-stream";

/// Checks a declared filename against the extension allow-list and the
/// content's magic signature.
#[derive(Debug, Clone)]
pub struct FileTypeValidator {
    config: Arc<PipelineConfig>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FileTypeError {
    #[error("invalid file type: {0}")]
    InvalidFileType(String),
}

impl FileTypeValidator {
    pub fn new(config: Arc<PipelineConfig>) -> Self {
        Self { config }
    }

    /// Reads up to the sniff window from `reader`, then rewinds it to offset 0
    /// whether or not validation passes.
    pub fn validate<R: Read + Seek>(
        &self,
        filename: &str,
        reader: &mut R,
    ) -> Result<ContentType, FileTypeError> {
        let extension = file_extension(filename).ok_or_else(|| {
            FileTypeError::InvalidFileType(format!("'{filename}' has no file extension"))
        })?;

        let declared = ContentType::from_extension(extension)
            .filter(|ct| self.config.allows(*ct))
            .ok_or_else(|| {
                FileTypeError::InvalidFileType(format!("extension '.{extension}' is not allowed"))
            })?;

        let header = read_header(reader, self.config.sniff_window_bytes);
        let rewound = reader.seek(SeekFrom::Start(0));

        let header = header.map_err(|e| {
            FileTypeError::InvalidFileType(format!("could not read file content: {e}"))
        })?;
        rewound.map_err(|e| {
            FileTypeError::InvalidFileType(format!("could not rewind file content: {e}"))
        })?;

        let detected = sniff_mime(&header);
        if detected != declared.as_mime() {
            tracing::warn!(
                filename,
                declared = declared.as_mime(),
                detected,
                "File signature does not match its extension"
            );
            return Err(FileTypeError::InvalidFileType(format!(
                "content of '{filename}' is {detected}, expected {}",
                declared.as_mime()
            )));
        }

        Ok(declared)
    }
}

fn read_header<R: Read>(reader: &mut R, window: usize) -> std::io::Result<Vec<u8>> {
    let mut header = Vec::with_capacity(window);
    reader.by_ref().take(window as u64).read_to_end(&mut header)?;
    Ok(header)
}

/// Infers a MIME type from leading bytes. A ZIP package counts as a Word
/// document when the window names a part under `word/`.
pub fn sniff_mime(header: &[u8]) -> &'static str {
    if header.starts_with(PDF_MAGIC) {
        return PDF_MIME;
    }
    if header.starts_with(ZIP_LOCAL_HEADER_MAGIC) {
        let names_word_part = header
            .windows(WORD_PART_PREFIX.len())
            .any(|w| w == WORD_PART_PREFIX);
        return if names_word_part { DOCX_MIME } else { ZIP_MIME };
    }
    OCTET_STREAM_MIME
}
