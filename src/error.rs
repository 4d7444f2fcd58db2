//! Error types for Muwanx
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Muwanx operations
pub type MuwanxResult<T> = Result<T, MuwanxError>;

/// Main error type for Muwanx operations
#[derive(Error, Debug)]
pub enum MuwanxError {
    /// One or more entity definitions are malformed or conflicting
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Distinct names map to the same on-disk name
    #[error(
        "name collision in {scope}: {} all sanitize to '{sanitized}'",
        quoted_list(.names)
    )]
    NameCollision {
        scope: String,
        sanitized: String,
        names: Vec<String>,
    },

    /// Output path already holds prior output
    #[error("output path already exists and is not empty: {path} (pass overwrite to replace it)")]
    AlreadyExists { path: PathBuf },

    /// Directory to serve does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Model provider failed to load or save a model
    #[error("model error at {path}: {message}")]
    Model { path: PathBuf, message: String },

    /// Policy configuration document could not be read or parsed
    #[error("invalid policy config {path}: {message}")]
    PolicyConfig { path: PathBuf, message: String },

    /// Invalid project file
    #[error("invalid project file {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Static server failure
    #[error("server error: {message}")]
    Server { message: String },

    /// File system failure on a known path
    #[error("I/O error at {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ValidationErrors> for MuwanxError {
    fn from(errors: ValidationErrors) -> Self {
        MuwanxError::Validation(errors)
    }
}

impl From<Violation> for MuwanxError {
    fn from(violation: Violation) -> Self {
        MuwanxError::Validation(ValidationErrors::single(violation))
    }
}

impl MuwanxError {
    /// Shorthand for a validation error carrying a single violation
    pub(crate) fn invalid(scope: impl Into<String>, message: impl Into<String>) -> Self {
        MuwanxError::Validation(ValidationErrors::single(Violation::new(scope, message)))
    }

    /// Violations carried by a validation error, empty for other variants
    pub fn violations(&self) -> &[Violation] {
        match self {
            MuwanxError::Validation(errors) => errors.violations(),
            _ => &[],
        }
    }
}

/// A single rule violation found in the entity graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Where the violation was found, e.g. `project 'Main' / scene 'G1'`
    pub scope: String,
    pub message: String,
}

impl Violation {
    pub fn new(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.scope, self.message)
    }
}

/// Every violation found in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), MuwanxError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(MuwanxError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violations.as_slice() {
            [] => write!(f, "validation failed"),
            [only] => write!(f, "validation failed: {}", only),
            many => {
                write!(f, "validation failed with {} violations:", many.len())?;
                for violation in many {
                    write!(f, "\n  - {}", violation)?;
                }
                Ok(())
            }
        }
    }
}

fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}
