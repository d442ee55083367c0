use std::io::{Cursor, Read};

use async_trait::async_trait;
use roxmltree::{Document as XmlDocument, Node};
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, Paragraph};

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads paragraphs out of a WordprocessingML package.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_document_xml(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::CorruptDocument(format!("DOCX is not a valid ZIP archive: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::CorruptDocument(format!("DOCX missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            FileLoaderError::CorruptDocument(format!("failed to read {DOCUMENT_PART}: {e}"))
        })?;

        Ok(xml)
    }

    /// Every `w:p` in document order, table cells included.
    fn paragraphs_from_xml(xml: &str) -> Result<Vec<Paragraph>, FileLoaderError> {
        let doc = XmlDocument::parse(xml).map_err(|e| {
            FileLoaderError::CorruptDocument(format!("failed to parse DOCX XML: {e}"))
        })?;

        Ok(doc
            .descendants()
            .filter(|node| is_word_element(node, "p"))
            .filter_map(|paragraph| Paragraph::new(paragraph_text(paragraph)))
            .collect())
    }
}

fn is_word_element(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

/// Concatenates the paragraph's own runs. Runs belonging to a paragraph nested
/// inside it (text boxes) are left to that paragraph.
fn paragraph_text(paragraph: Node) -> String {
    let mut text = String::new();

    for node in paragraph.descendants().skip(1) {
        // Only run content; `w:tab` also appears in tab-stop definitions.
        let in_run = node.parent().is_some_and(|p| is_word_element(&p, "r"));
        if !node.is_element() || !in_run {
            continue;
        }
        let owner = node.ancestors().skip(1).find(|a| is_word_element(a, "p"));
        if owner != Some(paragraph) {
            continue;
        }

        match node.tag_name().name() {
            "t" => text.push_str(node.text().unwrap_or_default()),
            "tab" => text.push(' '),
            "br" | "cr" => text.push('\n'),
            _ => {}
        }
    }

    text
}

#[async_trait]
impl FileLoader for DocxAdapter {
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
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let xml = Self::read_document_xml(data)?;
        let paragraphs = Self::paragraphs_from_xml(&xml)?;

        tracing::info!(
            paragraph_count = paragraphs.len(),
            "DOCX text extraction complete"
        );

        Ok(paragraphs)
    }
}
