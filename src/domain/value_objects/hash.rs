//! Content Hash Value Object
//!
//! Fingerprint of a file written into a bundle, reported in export results.

use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 digest rendered as `sha256:<hex>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    pub const PREFIX: &'static str = "sha256:";

    pub fn from_bytes(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without the prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
