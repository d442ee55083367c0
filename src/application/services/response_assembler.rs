use std::sync::Arc;

use crate::domain::{ChatResult, Citation, ComplementResult, PipelineConfig, RawCitation};

use super::source_domain_validator::SourceDomainValidator;
use super::text_sanitizer::TextSanitizer;

/// Combines generated text with validated citations into response payloads.
#[derive(Debug, Clone)]
pub struct ResponseAssembler {
    config: Arc<PipelineConfig>,
    validator: SourceDomainValidator,
    sanitizer: TextSanitizer,
}

impl ResponseAssembler {
    pub fn new(config: Arc<PipelineConfig>) -> Self {
        Self {
            validator: SourceDomainValidator::new(Arc::clone(&config)),
            sanitizer: TextSanitizer::new(config.max_text_chars),
            config,
        }
    }

    /// Keeps the trusted citations among the first candidates. Falls back to
    /// a single Google Scholar citation when none of them validate.
    pub fn assemble_complement<I>(&self, complement: String, candidates: I) -> ComplementResult
    where
        I: IntoIterator<Item = RawCitation>,
    {
        let mut sources: Vec<Citation> = candidates
            .into_iter()
            .take(self.config.max_complement_sources)
            .filter_map(|candidate| self.validate(candidate))
            .collect();

        if sources.is_empty() {
            tracing::debug!("No trusted citations in complement, using fallback");
            sources.push(Citation::fallback());
        }

        ComplementResult {
            complement,
            sources,
        }
    }

    /// No fallback here: a missing or untrusted source leaves
    /// `external_source` empty.
    pub fn assemble_chat(&self, answer: String, candidate: Option<RawCitation>) -> ChatResult {
        ChatResult {
            answer,
            external_source: candidate.and_then(|c| self.validate(c)),
        }
    }

    fn validate(&self, candidate: RawCitation) -> Option<Citation> {
        let url = candidate.url?;
        if !self.validator.is_trusted(&url) {
            return None;
        }

        let name = self.sanitizer.sanitize(&candidate.name);
        if name.is_blank() {
            return None;
        }

        Some(Citation::capped(
            name.as_str(),
            &url,
            self.config.max_citation_name_chars,
            self.config.max_citation_url_chars,
        ))
    }
}
