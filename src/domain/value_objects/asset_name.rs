//! Asset Name Value Object
//!
//! The on-disk form of a project, scene or policy name inside a bundle.
//! Sanitization is lossy (it is not injective), so callers that place several
//! names side by side must check for collisions themselves.

use std::fmt;

/// A sanitized name used as a bundle path segment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetName(String);

impl AssetName {
    /// Sanitize a display name: lower-case, spaces and hyphens become `_`
    pub fn sanitize(name: &str) -> Self {
        let sanitized = name
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        Self(sanitized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Why this name cannot be used as a single path segment, if it cannot
    pub fn segment_problem(&self) -> Option<&'static str> {
        if self.0.is_empty() {
            Some("sanitizes to an empty path segment")
        } else if self.0 == "." || self.0 == ".." {
            Some("sanitizes to a relative path component")
        } else if self.0.contains('/') || self.0.contains('\\') {
            Some("contains a path separator")
        } else if self.0.contains('\0') {
            Some("contains a NUL byte")
        } else {
            None
        }
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
