/// One unit of extracted document text. Order within an extraction result is
/// the order the text appears in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
}

impl Paragraph {
    /// Returns `None` for text that is blank after trimming.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self { text })
    }
}
