mod chat_result;
mod citation;
mod complement_result;
mod document;
mod paragraph;
mod pipeline_config;
mod sanitized_text;
mod suggestion_result;

pub use chat_result::ChatResult;
pub use citation::{
    Citation, FALLBACK_CITATION_NAME, FALLBACK_CITATION_URL, MAX_CITATION_NAME_CHARS,
    MAX_CITATION_URL_CHARS, RawCitation,
};
pub(crate) use citation::truncate_chars;
pub use complement_result::ComplementResult;
pub use document::{ContentType, DOCX_MIME, Document, DocumentId, PDF_MIME, file_extension};
pub use paragraph::Paragraph;
pub use pipeline_config::{
    DEFAULT_MAX_TEXT_CHARS, DEFAULT_MAX_UPLOAD_BYTES, MAX_COMPLEMENT_SOURCES,
    MAX_SUGGESTED_QUESTIONS, PipelineConfig, SNIFF_WINDOW_BYTES, TRUSTED_ACADEMIC_DOMAINS,
};
pub use sanitized_text::SanitizedText;
pub use suggestion_result::{FALLBACK_QUESTIONS, SuggestionResult};

/// Paragraphs extracted from one document, in document order.
pub type ExtractionResult = Vec<Paragraph>;
