use sha2::{Digest, Sha256};

/// Full identifier for content that has none of its own: the lowercase hex
/// SHA-256 of `input` (64 characters).
#[must_use]
pub fn resource_id(input: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(input.as_ref()))
}
