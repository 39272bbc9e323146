use sha2::{Digest, Sha256};

/// SHA-256 content digest of an uploaded file, as 64 lowercase hex chars.
///
/// Computed over raw bytes only: two uploads with identical content produce
/// identical digests no matter what the files are called.
pub fn content_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
