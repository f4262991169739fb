//! Checksum calculation for dataset identity.
//!
//! The derivation pipeline is memoized keyed on the identity of its raw
//! input; that identity is the SHA-256 of the source file bytes.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of raw dataset content.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}
