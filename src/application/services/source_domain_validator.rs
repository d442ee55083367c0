use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::domain::PipelineConfig;

static HTTP_URL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[^/\s]+(/.*)?$").unwrap());

/// Decides whether a citation URL points at a trusted academic host.
#[derive(Debug, Clone)]
pub struct SourceDomainValidator {
    config: Arc<PipelineConfig>,
}

impl SourceDomainValidator {
    pub fn new(config: Arc<PipelineConfig>) -> Self {
        Self { config }
    }

    pub fn is_trusted(&self, url: &str) -> bool {
        let Some(domain) = registrable_domain(url) else {
            return false;
        };

        let trusted = self.config.trusted_domains.iter().any(|allowed| {
            domain == *allowed
                || domain
                    .strip_suffix(allowed.as_str())
                    .is_some_and(|prefix| prefix.ends_with('.'))
        });

        if !trusted {
            tracing::debug!(%domain, "Rejected citation from untrusted domain");
        }
        trusted
    }
}

/// Lowercased host reduced to its last two dot-separated labels. The host
/// ends at the first `/`, `?` or `#`; a port is dropped.
///
/// Compound public suffixes are not special-cased: `www.example.co.uk`
/// reduces to `co.uk`.
fn registrable_domain(url: &str) -> Option<String> {
    if url.is_empty() || !HTTP_URL_SHAPE.is_match(url) {
        return None;
    }

    let (_, rest) = url.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next()?;
    // Userinfo hides the real host behind `@`.
    if authority.contains('@') {
        return None;
    }

    let host = authority
        .rsplit_once(':')
        .map_or(authority, |(host, _port)| host)
        .to_lowercase();
    if host.is_empty() {
        return None;
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() > 2 {
        Some(labels[labels.len() - 2..].join("."))
    } else {
        Some(host)
    }
}

