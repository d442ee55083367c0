use scholia::domain::{
    Citation, FALLBACK_CITATION_NAME, FALLBACK_CITATION_URL, MAX_CITATION_NAME_CHARS,
    MAX_CITATION_URL_CHARS,
};

#[test]
fn given_fallback_when_built_then_points_to_google_scholar() {
    let citation = Citation::fallback();

    assert_eq!(citation.name, FALLBACK_CITATION_NAME);
    assert_eq!(citation.url, FALLBACK_CITATION_URL);
    assert_eq!(citation.name, "Google Scholar");
    assert_eq!(citation.url, "https://scholar.google.com");
}

#[test]
fn given_oversized_fields_when_creating_citation_then_caps_both() {
    let name = "n".repeat(MAX_CITATION_NAME_CHARS + 50);
    let url = format!("https://arxiv.org/{}", "a".repeat(MAX_CITATION_URL_CHARS));

    let citation = Citation::new(&name, &url);

    assert_eq!(citation.name.chars().count(), MAX_CITATION_NAME_CHARS);
    assert_eq!(citation.url.chars().count(), MAX_CITATION_URL_CHARS);
}

#[test]
fn given_multibyte_name_when_capping_then_cuts_on_char_boundary() {
    let name = "é".repeat(10);

    let citation = Citation::capped(&name, "https://doi.org", 3, 100);

    assert_eq!(citation.name, "ééé");
}

#[test]
fn given_padded_fields_when_creating_citation_then_trims_them() {
    let citation = Citation::new("  Nature  ", " https://www.nature.com ");

    assert_eq!(citation.name, "Nature");
    assert_eq!(citation.url, "https://www.nature.com");
}
