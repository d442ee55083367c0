use std::io::{Cursor, Read, Seek, SeekFrom};
use std::sync::Arc;

use scholia::application::services::{FileTypeError, FileTypeValidator, sniff_mime};
use scholia::domain::{ContentType, DOCX_MIME, PDF_MIME, PipelineConfig};

use crate::helpers::docx_bytes;

fn validator() -> FileTypeValidator {
    FileTypeValidator::new(Arc::new(PipelineConfig::default()))
}

#[test]
fn given_pdf_signature_and_extension_when_validating_then_accepts_pdf() {
    let mut reader = Cursor::new(b"%PDF-1.7\n%binary".to_vec());

    let result = validator().validate("paper.pdf", &mut reader);

    assert_eq!(result, Ok(ContentType::Pdf));
}

#[test]
fn given_word_package_when_validating_then_accepts_docx() {
    let mut reader = Cursor::new(docx_bytes(&["Intro"]));

    let result = validator().validate("notes.DOCX", &mut reader);

    assert_eq!(result, Ok(ContentType::Docx));
}

#[test]
fn given_plain_text_named_pdf_when_validating_then_rejects() {
    let mut reader = Cursor::new(b"just some plain text pretending".to_vec());

    let result = validator().validate("report.pdf", &mut reader);

    assert!(matches!(result, Err(FileTypeError::InvalidFileType(_))));
}

#[test]
fn given_pdf_named_docx_when_validating_then_rejects() {
    let mut reader = Cursor::new(b"%PDF-1.4 body".to_vec());

    let result = validator().validate("notes.docx", &mut reader);

    assert!(matches!(result, Err(FileTypeError::InvalidFileType(_))));
}

#[test]
fn given_unlisted_extension_when_validating_then_rejects_before_reading() {
    let mut reader = Cursor::new(b"hello".to_vec());

    let result = validator().validate("notes.txt", &mut reader);

    assert!(matches!(result, Err(FileTypeError::InvalidFileType(_))));
    assert_eq!(reader.position(), 0);
}

#[test]
fn given_filename_without_extension_when_validating_then_rejects() {
    let mut reader = Cursor::new(b"%PDF-1.4".to_vec());

    let result = validator().validate("paper", &mut reader);

    assert!(matches!(result, Err(FileTypeError::InvalidFileType(_))));
}

#[test]
fn given_accepted_file_when_validating_then_stream_is_rewound() {
    let mut reader = Cursor::new(b"%PDF-1.4 rest of file".to_vec());

    validator().validate("paper.pdf", &mut reader).unwrap();

    let mut all = Vec::new();
    reader.read_to_end(&mut all).unwrap();
    assert_eq!(all, b"%PDF-1.4 rest of file");
}

#[test]
fn given_rejected_file_when_validating_then_stream_is_rewound() {
    let mut reader = Cursor::new(b"plain text".to_vec());
    reader.seek(SeekFrom::Start(3)).unwrap();

    let _ = validator().validate("paper.pdf", &mut reader);

    assert_eq!(reader.position(), 0);
}

#[test]
fn given_docx_disallowed_by_config_when_validating_then_rejects() {
    let config = PipelineConfig {
        allowed_types: vec![ContentType::Pdf],
        ..PipelineConfig::default()
    };
    let validator = FileTypeValidator::new(Arc::new(config));
    let mut reader = Cursor::new(docx_bytes(&["Intro"]));

    let result = validator.validate("notes.docx", &mut reader);

    assert!(matches!(result, Err(FileTypeError::InvalidFileType(_))));
}

#[test]
fn given_headers_when_sniffing_then_detects_mime() {
    assert_eq!(sniff_mime(b"%PDF-1.5"), PDF_MIME);
    assert_eq!(sniff_mime(&docx_bytes(&["x"])), DOCX_MIME);
    assert_eq!(sniff_mime(b"PK\x03\x04plain-zip-entry.txt"), "application/zip");
    assert_eq!(sniff_mime(b""), "application/octet-stream");
}

#[test]
fn given_word_package_with_document_part_last_when_sniffing_then_detects_docx() {
    let data = docx_bytes(&["Intro", "Body text"]);
    let first_entry = b"[Content_Types].xml";

    assert_eq!(&data[30..30 + first_entry.len()], first_entry);
    assert_eq!(sniff_mime(&data[..data.len().min(2048)]), DOCX_MIME);
    assert_eq!(
        validator().validate("informe.docx", &mut Cursor::new(data)),
        Ok(ContentType::Docx)
    );
}
