use super::citation::Citation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResult {
    pub answer: String,
    /// `None` when the answer carries no external supplement or its source
    /// did not validate.
    pub external_source: Option<Citation>,
}
