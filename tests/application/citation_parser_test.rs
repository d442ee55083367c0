use scholia::application::services::CitationParser;
use scholia::domain::RawCitation;

#[test]
fn given_bullet_list_when_parsing_then_yields_candidates_in_order() {
    let text = "• Nature (https://www.nature.com/articles/123)\n• Some Blog (http://someblog.example.com)";

    let candidates: Vec<RawCitation> = CitationParser::new().parse(text).collect();

    assert_eq!(
        candidates,
        vec![
            RawCitation::new("Nature", Some("https://www.nature.com/articles/123".to_string())),
            RawCitation::new("Some Blog", Some("http://someblog.example.com".to_string())),
        ]
    );
}

#[test]
fn given_numbered_list_when_parsing_then_yields_candidates() {
    let text = "Fuentes:\n1. arXiv (https://arxiv.org/abs/2101.00001)\n2. JSTOR (https://www.jstor.org/stable/1)";

    let names: Vec<String> = CitationParser::new().parse(text).map(|c| c.name).collect();

    assert_eq!(names, vec!["arXiv", "JSTOR"]);
}

#[test]
fn given_markdown_decorated_name_when_parsing_then_strips_markers() {
    let text = "• **Nature** (https://www.nature.com)\n• ## PubMed (https://pubmed.ncbi.nlm.nih.gov/1)";

    let names: Vec<String> = CitationParser::new().parse(text).map(|c| c.name).collect();

    assert_eq!(names, vec!["Nature", "PubMed"]);
}

#[test]
fn given_uppercase_scheme_when_parsing_then_matches() {
    let text = "• DOI (HTTPS://doi.org/10.1000/xyz)";

    let candidates: Vec<RawCitation> = CitationParser::new().parse(text).collect();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].url.as_deref(), Some("HTTPS://doi.org/10.1000/xyz"));
}

#[test]
fn given_text_without_citations_when_parsing_then_yields_nothing() {
    let text = "La fotosíntesis convierte la luz en energía química.";

    assert_eq!(CitationParser::new().parse(text).count(), 0);
}

#[test]
fn given_bullet_without_url_when_parsing_then_skips_it() {
    let text = "• Un libro sin enlace\n• Nature (https://www.nature.com)";

    let names: Vec<String> = CitationParser::new().parse(text).map(|c| c.name).collect();

    assert_eq!(names, vec!["Nature"]);
}

#[test]
fn given_non_http_scheme_when_parsing_then_skips_it() {
    let text = "• Archivo (ftp://files.example.org/paper.pdf)";

    assert_eq!(CitationParser::new().parse(text).count(), 0);
}

#[test]
fn given_marker_and_source_line_when_parsing_chat_then_returns_source() {
    let answer = "El documento explica la fotosíntesis.\n\nInformación adicional: los cloroplastos...\nFuente: Nature (https://www.nature.com/articles/1)";

    let source = CitationParser::new().parse_external_source(answer);

    assert_eq!(
        source,
        Some(RawCitation::new(
            "Nature",
            Some("https://www.nature.com/articles/1".to_string())
        ))
    );
}

#[test]
fn given_source_line_without_url_when_parsing_chat_then_url_is_absent() {
    let answer = "Respuesta.\nInformacion adicional: algo más.\nFuente: Manual de biología";

    let source = CitationParser::new().parse_external_source(answer).unwrap();

    assert_eq!(source.name, "Manual de biología");
    assert_eq!(source.url, None);
}

#[test]
fn given_source_line_without_marker_when_parsing_chat_then_returns_none() {
    let answer = "Respuesta basada en el documento.\nFuente: Nature (https://www.nature.com)";

    assert_eq!(CitationParser::new().parse_external_source(answer), None);
}

#[test]
fn given_source_before_marker_when_parsing_chat_then_ignores_it() {
    let answer = "Fuente: Blog (http://blog.example.com)\nINFORMACIÓN ADICIONAL: más datos.\nFuente: arXiv (https://arxiv.org/abs/1)";

    let source = CitationParser::new().parse_external_source(answer).unwrap();

    assert_eq!(source.name, "arXiv");
}
