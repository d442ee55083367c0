use scholia::application::ports::{LlmClient, LlmClientError};
use scholia::application::services::CitationParser;
use scholia::infrastructure::llm::MockLlmClient;

#[tokio::test]
async fn given_fixed_response_when_generating_then_returns_it_for_any_prompt() {
    let client = MockLlmClient::new("respuesta fija");

    assert_eq!(client.generate("a").await.unwrap(), "respuesta fija");
    assert_eq!(client.generate("b").await.unwrap(), "respuesta fija");
}

#[tokio::test]
async fn given_failing_client_when_generating_then_returns_api_error() {
    let client = MockLlmClient::failing("boom");

    let result = client.generate("prompt").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(m)) if m == "boom"));
}

#[tokio::test]
async fn given_scaffold_client_when_generating_then_output_carries_parseable_citations() {
    let text = MockLlmClient::scaffold().generate("prompt").await.unwrap();
    let parser = CitationParser::new();

    assert_eq!(parser.parse(&text).count(), 2);
    assert!(parser.parse_external_source(&text).is_some());
}
