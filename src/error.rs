//! Error types for status classification.

/// Errors returned when classifying a product status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    /// The input is not one of the recognized statuses.
    #[error("Unable to determine product status '{status}'")]
    UnrecognizedStatusKind { status: String },
}

impl StatusError {
    /// Returns the input that failed to classify.
    pub fn status(&self) -> &str {
        match self {
            Self::UnrecognizedStatusKind { status } => status,
        }
    }
}
