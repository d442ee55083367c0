use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{
    ChatResult, ComplementResult, PipelineConfig, SanitizedText, SuggestionResult,
};

use super::citation_parser::CitationParser;
use super::prompts::{chat_prompt, complement_prompt, suggestions_prompt};
use super::response_assembler::ResponseAssembler;
use super::text_sanitizer::TextSanitizer;

const MIN_COMPLEMENT_CHARS: usize = 10;
const MIN_QUESTION_CHARS: usize = 3;

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•]|\d+[.)])\s*").unwrap());

/// The three model-backed operations. Every input is sanitized before it
/// reaches the model and every output before it reaches the caller.
pub struct AugmentationService<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
    sanitizer: TextSanitizer,
    parser: CitationParser,
    assembler: ResponseAssembler,
    config: Arc<PipelineConfig>,
}

impl<L> AugmentationService<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>, config: Arc<PipelineConfig>) -> Self {
        Self {
            llm_client,
            sanitizer: TextSanitizer::new(config.max_text_chars),
            parser: CitationParser::new(),
            assembler: ResponseAssembler::new(Arc::clone(&config)),
            config,
        }
    }

    #[tracing::instrument(skip_all)]
    pub async fn complement(&self, text: &str) -> Result<ComplementResult, AugmentationError> {
        let text = self.sanitizer.sanitize(text);
        if text.as_str().trim().chars().count() < MIN_COMPLEMENT_CHARS {
            return Err(AugmentationError::EmptyInput(format!(
                "text must be at least {MIN_COMPLEMENT_CHARS} characters"
            )));
        }

        let generated = self.generate(&complement_prompt(text.as_str())).await?;
        let candidates = self.parser.parse(generated.as_str());
        let result = self
            .assembler
            .assemble_complement(generated.as_str().to_string(), candidates);

        tracing::info!(sources = result.sources.len(), "Complement generated");
        Ok(result)
    }

    #[tracing::instrument(skip_all)]
    pub async fn chat(
        &self,
        question: &str,
        document_text: &str,
    ) -> Result<ChatResult, AugmentationError> {
        let question = self.sanitizer.sanitize(question);
        if question.as_str().trim().chars().count() < MIN_QUESTION_CHARS {
            return Err(AugmentationError::EmptyInput(format!(
                "question must be at least {MIN_QUESTION_CHARS} characters"
            )));
        }
        let document_text = self.require_document(document_text)?;

        let answer = self
            .generate(&chat_prompt(question.as_str().trim(), document_text.as_str()))
            .await?;
        let candidate = self.parser.parse_external_source(answer.as_str());
        let result = self.assembler.assemble_chat(answer.into_string(), candidate);

        tracing::info!(
            has_external_source = result.external_source.is_some(),
            "Chat answer generated"
        );
        Ok(result)
    }

    #[tracing::instrument(skip_all)]
    pub async fn suggest_questions(
        &self,
        document_text: &str,
    ) -> Result<SuggestionResult, AugmentationError> {
        let document_text = self.require_document(document_text)?;
        let limit = self.config.max_suggested_questions;

        let generated = self
            .generate(&suggestions_prompt(document_text.as_str(), limit))
            .await?;

        let questions: Vec<String> = generated
            .as_str()
            .lines()
            .map(|line| LIST_MARKER.replace(line.trim(), "").trim().to_string())
            .filter(|line| !line.is_empty())
            .take(limit)
            .collect();

        if questions.is_empty() {
            tracing::debug!("Model produced no usable questions, using fallback");
            return Ok(SuggestionResult::fallback());
        }

        Ok(SuggestionResult { questions })
    }

    fn require_document(&self, document_text: &str) -> Result<SanitizedText, AugmentationError> {
        let document_text = self.sanitizer.sanitize(document_text);
        if document_text.is_blank() {
            return Err(AugmentationError::EmptyInput(
                "upload a document before asking about it".to_string(),
            ));
        }
        Ok(document_text)
    }

    /// One call, no retry. Empty output counts as a failure.
    async fn generate(&self, prompt: &str) -> Result<SanitizedText, AugmentationError> {
        let raw = self
            .llm_client
            .generate(prompt)
            .await
            .map_err(AugmentationError::Upstream)?;

        let generated = self.sanitizer.sanitize(&raw);
        if generated.is_blank() {
            return Err(AugmentationError::Upstream(LlmClientError::InvalidResponse(
                "model returned no text".to_string(),
            )));
        }
        Ok(generated)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AugmentationError {
    #[error("empty input: {0}")]
    EmptyInput(String),
    #[error("upstream failure: {0}")]
    Upstream(#[from] LlmClientError),
}
