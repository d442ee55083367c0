pub const FALLBACK_QUESTIONS: [&str; 5] = [
    "¿Cuál es el tema principal?",
    "¿Qué métodos se mencionan?",
    "¿Cuáles son las conclusiones?",
    "¿Hay datos estadísticos relevantes?",
    "¿Qué fuentes se citan?",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResult {
    pub questions: Vec<String>,
}

impl SuggestionResult {
    pub fn fallback() -> Self {
        Self {
            questions: FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }
}
