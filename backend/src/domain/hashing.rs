use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `content`.
pub fn checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
