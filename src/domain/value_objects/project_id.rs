//! Project ID Value Object
//!
//! A validated routing identifier. The viewer builds hash routes of the form
//! `#/<id>/` from it, so it must not contain characters that would split or
//! terminate the route.

use std::fmt;

/// Error when project ID validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectIdError {
    /// ID is the empty string
    Empty,
    /// ID contains a reserved routing character
    ReservedCharacter { id: String, character: char },
    /// ID contains whitespace
    Whitespace { id: String },
}

impl fmt::Display for ProjectIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectIdError::Empty => write!(f, "project id must not be empty"),
            ProjectIdError::ReservedCharacter { id, character } => write!(
                f,
                "project id '{}' contains reserved routing character '{}'",
                id, character
            ),
            ProjectIdError::Whitespace { id } => {
                write!(f, "project id '{}' must not contain whitespace", id)
            }
        }
    }
}

impl std::error::Error for ProjectIdError {}

/// A URL-safe project identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(String);

impl ProjectId {
    /// Characters that would break `#/<id>/` routes
    pub const RESERVED: &'static [char] = &['/', '#'];

    /// Create a new ProjectId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, ProjectIdError> {
        let id = id.into();

        if id.is_empty() {
            return Err(ProjectIdError::Empty);
        }

        if let Some(character) = id.chars().find(|c| Self::RESERVED.contains(c)) {
            return Err(ProjectIdError::ReservedCharacter { id, character });
        }

        if id.chars().any(char::is_whitespace) {
            return Err(ProjectIdError::Whitespace { id });
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash-fragment route served by the viewer
    pub fn route(&self) -> String {
        format!("#/{}/", self.0)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
