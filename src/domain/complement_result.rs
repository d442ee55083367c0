use super::citation::Citation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplementResult {
    pub complement: String,
    /// One or two citations; never empty.
    pub sources: Vec<Citation>,
}
