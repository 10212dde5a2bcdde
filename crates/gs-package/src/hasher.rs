// hasher.rs - SHA-256 checksums for packaged bundles, lowercase hex.

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::PackageError;

/// SHA-256 of `data` as a 64-character lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// SHA-256 of a file's contents. Read failures carry the path.
pub fn hash_file(path: &Path) -> Result<String, PackageError> {
    let data = std::fs::read(path).map_err(|source| PackageError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    Ok(hash_bytes(&data))
}
