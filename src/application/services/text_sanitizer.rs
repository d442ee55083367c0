use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{DEFAULT_MAX_TEXT_CHARS, SanitizedText, truncate_chars};

static SCRIPT_OR_STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>").unwrap()
});

static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

// C0 without `\n`, then DEL and the C1 range.
static CONTROL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x09\x0B-\x1F\x7F-\x9F]").unwrap());

/// Strips markup and control characters from untrusted text and caps its length.
#[derive(Debug, Clone, Copy)]
pub struct TextSanitizer {
    max_chars: usize,
}

impl Default for TextSanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_CHARS)
    }
}

impl TextSanitizer {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn sanitize(&self, input: &str) -> SanitizedText {
        SanitizedText::from_sanitized(sanitize_text(input, self.max_chars))
    }

    /// Treats a missing value as empty input.
    pub fn sanitize_opt(&self, input: Option<&str>) -> SanitizedText {
        self.sanitize(input.unwrap_or_default())
    }
}

/// Total function: empty in, empty out. Applying it twice gives the same
/// result as applying it once.
pub fn sanitize_text(input: &str, max_chars: usize) -> String {
    if input.is_empty() {
        return String::new();
    }

    let without_blocks = SCRIPT_OR_STYLE_BLOCK.replace_all(input, "");
    let without_tags = MARKUP_TAG.replace_all(&without_blocks, "");
    let printable = CONTROL_CHARS.replace_all(&without_tags, "");

    truncate_chars(&printable, max_chars)
}
