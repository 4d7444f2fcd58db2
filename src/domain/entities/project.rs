//! Project entity - a routed collection of scenes

use super::Scene;
use crate::domain::value_objects::{Metadata, ProjectId};

/// Route of the project without an id
pub const ROOT_ROUTE: &str = "/";

/// A demo project, immutable once its app is built
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    name: String,
    /// `None` marks the root route
    id: Option<ProjectId>,
    metadata: Metadata,
    scenes: Vec<Scene>,
}

impl Project {
    pub(crate) fn new(
        name: String,
        id: Option<ProjectId>,
        metadata: Metadata,
        scenes: Vec<Scene>,
    ) -> Self {
        Self {
            name,
            id,
            metadata,
            scenes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> Option<&ProjectId> {
        self.id.as_ref()
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Scenes in attach order
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.name() == name)
    }

    pub fn is_root(&self) -> bool {
        self.id.is_none()
    }

    /// Viewer route: `/` for the root project, `#/<id>/` otherwise
    pub fn route(&self) -> String {
        match &self.id {
            Some(id) => id.route(),
            None => ROOT_ROUTE.to_string(),
        }
    }
}
