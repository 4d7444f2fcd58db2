//! Staging records owned by the builder
//!
//! Drafts are mutable and never leave the `builder` module; callers reach
//! them only through handles. `freeze` moves each draft into its immutable
//! entity.

use crate::domain::entities::{Policy, Project, Scene};
use crate::domain::value_objects::{Metadata, ModelSource, ProjectId};

#[derive(Debug)]
pub(super) struct ProjectDraft {
    pub name: String,
    /// `None` for the root project
    pub id: Option<ProjectId>,
    pub metadata: Metadata,
    pub scenes: Vec<SceneDraft>,
}

#[derive(Debug)]
pub(super) struct SceneDraft {
    pub name: String,
    pub model: ModelSource,
    pub metadata: Metadata,
    pub policies: Vec<PolicyDraft>,
}

#[derive(Debug)]
pub(super) struct PolicyDraft {
    pub name: String,
    pub model: ModelSource,
    pub metadata: Metadata,
    pub config: Option<serde_json::Value>,
    pub config_path: Option<String>,
    pub source_path: Option<String>,
}

impl ProjectDraft {
    pub fn is_root(&self) -> bool {
        self.id.is_none()
    }

    pub fn has_scene(&self, name: &str) -> bool {
        self.scenes.iter().any(|s| s.name == name)
    }

    pub fn freeze(self) -> Project {
        let scenes = self.scenes.into_iter().map(SceneDraft::freeze).collect();
        Project::new(self.name, self.id, self.metadata, scenes)
    }
}

impl SceneDraft {
    pub fn has_policy(&self, name: &str) -> bool {
        self.policies.iter().any(|p| p.name == name)
    }

    fn freeze(self) -> Scene {
        let policies = self.policies.into_iter().map(PolicyDraft::freeze).collect();
        Scene::new(self.name, self.model, self.metadata, policies)
    }
}

impl PolicyDraft {
    fn freeze(self) -> Policy {
        Policy::new(
            self.name,
            self.model,
            self.metadata,
            self.config,
            self.config_path,
            self.source_path,
        )
    }
}
