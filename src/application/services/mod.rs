mod augmentation_service;
mod citation_parser;
mod extraction_service;
mod file_type_validator;
mod prompts;
mod response_assembler;
mod source_domain_validator;
mod text_sanitizer;

pub use augmentation_service::{AugmentationError, AugmentationService};
pub use citation_parser::CitationParser;
pub use extraction_service::{ExtractionError, ExtractionService};
pub use file_type_validator::{FileTypeError, FileTypeValidator, sniff_mime};
pub use response_assembler::ResponseAssembler;
pub use source_domain_validator::SourceDomainValidator;
pub use text_sanitizer::{TextSanitizer, sanitize_text};
