#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed {kind} fragment: {reason}")]
    MalformedFragment { kind: String, reason: String },
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    pub(crate) fn malformed(kind: &str, reason: impl Into<String>) -> Self {
        ParseError::MalformedFragment {
            kind: kind.to_string(),
            reason: reason.into(),
        }
    }
}
