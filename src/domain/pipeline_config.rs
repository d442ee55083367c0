use super::citation::{MAX_CITATION_NAME_CHARS, MAX_CITATION_URL_CHARS};
use super::document::ContentType;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_MAX_TEXT_CHARS: usize = 50_000;
pub const SNIFF_WINDOW_BYTES: usize = 2048;
pub const MAX_COMPLEMENT_SOURCES: usize = 2;
pub const MAX_SUGGESTED_QUESTIONS: usize = 5;

/// Hosts accepted as citation sources, compared against the last two labels
/// of a URL's host.
pub const TRUSTED_ACADEMIC_DOMAINS: &[&str] = &[
    "scholar.google.com",
    "jstor.org",
    "pubmed.ncbi.nlm.nih.gov",
    "nih.gov",
    "doi.org",
    "arxiv.org",
    "nature.com",
    "science.org",
    "sciencedirect.com",
    "springer.com",
    "wiley.com",
    "tandfonline.com",
    "sagepub.com",
    "cambridge.org",
    "oup.com",
    "ieee.org",
    "acm.org",
    "plos.org",
    "frontiersin.org",
    "mdpi.com",
    "researchgate.net",
    "semanticscholar.org",
    "scielo.org",
    "redalyc.org",
    "unirioja.es",
];

/// Immutable limits and allow-lists shared by every pipeline stage. Built
/// once at startup; changing the allow-lists means redeploying.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub allowed_types: Vec<ContentType>,
    pub trusted_domains: Vec<String>,
    pub max_upload_bytes: usize,
    pub max_text_chars: usize,
    pub sniff_window_bytes: usize,
    pub max_citation_name_chars: usize,
    pub max_citation_url_chars: usize,
    pub max_complement_sources: usize,
    pub max_suggested_questions: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            allowed_types: vec![ContentType::Pdf, ContentType::Docx],
            trusted_domains: TRUSTED_ACADEMIC_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_text_chars: DEFAULT_MAX_TEXT_CHARS,
            sniff_window_bytes: SNIFF_WINDOW_BYTES,
            max_citation_name_chars: MAX_CITATION_NAME_CHARS,
            max_citation_url_chars: MAX_CITATION_URL_CHARS,
            max_complement_sources: MAX_COMPLEMENT_SOURCES,
            max_suggested_questions: MAX_SUGGESTED_QUESTIONS,
        }
    }
}

impl PipelineConfig {
    pub fn with_limits(max_upload_bytes: usize, max_text_chars: usize) -> Self {
        Self {
            max_upload_bytes,
            max_text_chars,
            ..Self::default()
        }
    }

    pub fn allows(&self, content_type: ContentType) -> bool {
        self.allowed_types.contains(&content_type)
    }
}
