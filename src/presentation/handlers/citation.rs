use serde::Serialize;

use crate::domain::Citation;

#[derive(Debug, Serialize)]
pub struct CitationResponse {
    pub name: String,
    pub url: String,
}

impl From<Citation> for CitationResponse {
    fn from(citation: Citation) -> Self {
        Self {
            name: citation.name,
            url: citation.url,
        }
    }
}
