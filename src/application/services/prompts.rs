pub fn complement_prompt(text: &str) -> String {
    format!(
        "Complementa esta información y menciona 2 fuentes académicas reales. \
         Escribe cada fuente al final en su propia línea con el formato \
         \"• Nombre de la fuente (URL)\".\n\n{text}"
    )
}

pub fn chat_prompt(question: &str, document_text: &str) -> String {
    format!(
        "Responde la pregunta usando únicamente el documento. Cita textualmente entre \
         comillas los fragmentos del documento que uses. Si necesitas añadir información \
         externa al documento, escríbela después de una línea \"Información adicional:\" \
         e indica su origen con una línea \"Fuente: Nombre (URL)\".\n\n\
         Documento:\n{document_text}\n\nPregunta: {question}"
    )
}

pub fn suggestions_prompt(document_text: &str, count: usize) -> String {
    format!(
        "Genera {count} preguntas breves que un lector podría hacer sobre el siguiente \
         documento. Escribe una pregunta por línea, sin texto adicional.\n\n{document_text}"
    )
}
