//! Content-derived identity for questions and answers.
//!
//! A question is identified by the digest of its description text, an answer
//! by the digest of its value text. Identical text always yields the same id,
//! across bank reloads and across sessions, which is what makes cross-attempt
//! aggregation and "skip already-seen questions" possible without any
//! external registry.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Stable identifier derived from text content.
///
/// Holds the lowercase hex SHA-256 digest of the text's UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Digest `text` into its stable identifier.
    pub fn of(text: &str) -> Self {
        let digest = Sha256::digest(text.as_bytes());
        ContentHash(format!("{digest:x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
