use std::sync::LazyLock;

use regex::Regex;

use crate::domain::RawCitation;

// A bullet (`•`) or `12.` at line start, a name without parentheses, then a
// parenthesized http(s) URL.
static LIST_CITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:•|\d+\.)[ \t]*(?P<name>[^()\n]+?)[ \t]*\((?P<url>https?://[^\s)]+)\)")
        .unwrap()
});

static ADDITIONAL_INFO_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)informaci[oó]n adicional:").unwrap());

static SOURCE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)fuente:[ \t]*(?P<name>[^()\n]+)(?:\((?P<url>https?://[^\s)]+)\)?)?").unwrap()
});

/// Best-effort extraction of citation candidates from free-form generated
/// text. Not a grammar: anything that does not fit the patterns is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CitationParser;

impl CitationParser {
    pub fn new() -> Self {
        Self
    }

    /// Lazily yields bullet/numbered citations in order of appearance.
    pub fn parse<'t>(&self, text: &'t str) -> impl Iterator<Item = RawCitation> + 't {
        LIST_CITATION.captures_iter(text).filter_map(|caps| {
            let name = clean_name(caps.name("name")?.as_str());
            if name.is_empty() {
                return None;
            }
            let url = caps.name("url")?.as_str().to_string();
            Some(RawCitation::new(name, Some(url)))
        })
    }

    /// Finds the first `Fuente: NAME (URL)` line after the additional
    /// information marker. The URL part is optional.
    pub fn parse_external_source(&self, answer: &str) -> Option<RawCitation> {
        let marker = ADDITIONAL_INFO_MARKER.find(answer)?;
        let supplement = &answer[marker.end()..];

        SOURCE_LINE.captures_iter(supplement).find_map(|caps| {
            let name = clean_name(caps.name("name")?.as_str());
            if name.is_empty() {
                return None;
            }
            let url = caps.name("url").map(|m| m.as_str().to_string());
            Some(RawCitation::new(name, url))
        })
    }
}

fn clean_name(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '*' || c == '#')
        .to_string()
}
