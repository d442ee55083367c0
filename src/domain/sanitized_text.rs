use std::fmt;

/// Text that has passed through the sanitizer: no markup tags, no control
/// characters other than `\n`, bounded length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SanitizedText(String);

impl SanitizedText {
    /// Wraps a string the caller has already sanitized.
    pub(crate) fn from_sanitized(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl AsRef<str> for SanitizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SanitizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
