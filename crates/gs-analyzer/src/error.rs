// error.rs - Error types for prompt analysis.

use thiserror::Error;

/// Errors that can occur while analyzing a goal document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The document has no statement that can serve as the primary goal.
    /// Nothing partial is returned.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },
}

impl AnalyzerError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        AnalyzerError::MalformedInput {
            reason: reason.into(),
        }
    }
}
