// error.rs - Error types for bundle packaging.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// `bundle.json` does not match the checksum recorded in the manifest.
    #[error("bundle checksum mismatch: manifest says {expected}, file hashes to {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}
