//! Error type shared by the toggles and their DOM backends.

/// Failures surfaced by toggle operations.
#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    /// No element in the document carries the given id.
    #[error("no element with id `{id}`")]
    ElementNotFound { id: String },
    /// The element exists but has no inline style to read or write.
    #[error("element `{id}` has no inline style")]
    NotStylable { id: String },
    /// The host document rejected a call or is unavailable.
    #[error("host document error: {0}")]
    Host(String),
    /// A read-more configuration could not be parsed.
    #[error("invalid read-more config: {0}")]
    Config(#[from] serde_json::Error),
}

impl ToggleError {
    pub(crate) fn not_found(id: &str) -> Self {
        Self::ElementNotFound { id: id.to_owned() }
    }
}
