pub const MAX_CITATION_NAME_CHARS: usize = 200;
pub const MAX_CITATION_URL_CHARS: usize = 500;

pub const FALLBACK_CITATION_NAME: &str = "Google Scholar";
pub const FALLBACK_CITATION_URL: &str = "https://scholar.google.com";

/// A citation candidate as found in generated text, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCitation {
    pub name: String,
    pub url: Option<String>,
}

impl RawCitation {
    pub fn new(name: impl Into<String>, url: Option<String>) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }
}

/// A citation whose URL passed the trusted-domain check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub name: String,
    pub url: String,
}

impl Citation {
    /// Builds a citation, capping `name` and `url` at their maximum lengths.
    pub fn new(name: &str, url: &str) -> Self {
        Self::capped(name, url, MAX_CITATION_NAME_CHARS, MAX_CITATION_URL_CHARS)
    }

    pub fn capped(name: &str, url: &str, max_name_chars: usize, max_url_chars: usize) -> Self {
        Self {
            name: truncate_chars(name.trim(), max_name_chars),
            url: truncate_chars(url.trim(), max_url_chars),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_CITATION_NAME, FALLBACK_CITATION_URL)
    }
}

pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
