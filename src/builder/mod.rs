//! Builder - incremental construction of an `App`
//!
//! ```
//! use muwanx::builder::{Builder, PolicySpec, ProjectSpec, SceneSpec};
//! use muwanx::ModelBlob;
//!
//! let mut builder = Builder::default();
//! let mut project = builder.add_project(ProjectSpec::new("Main")).unwrap();
//! let mut scene = project
//!     .add_scene(SceneSpec::new("G1", ModelBlob::new("xml", b"<mujoco/>".to_vec())))
//!     .unwrap();
//! scene
//!     .add_policy(PolicySpec::new("Tracking", ModelBlob::new("onnx", vec![0u8; 4])))
//!     .unwrap();
//!
//! let app = builder.build().unwrap();
//! assert_eq!(app.projects()[0].scenes()[0].policies()[0].name(), "Tracking");
//! ```

mod drafts;
mod handles;
mod spec;

pub use handles::{PolicyHandle, ProjectHandle, ProjectView, SceneHandle};
pub use spec::{PolicySpec, ProjectSpec, SceneSpec};

use drafts::ProjectDraft;

use crate::domain::entities::App;
use crate::domain::services::validator::{
    duplicate_id_violation, multiple_roots_violation, name_violation, project_scope, scene_scope,
};
use crate::domain::services::GraphValidator;
use crate::domain::value_objects::ProjectId;
use crate::error::{MuwanxResult, Violation};

/// Base path used when none is given
pub const DEFAULT_BASE_PATH: &str = "/";

/// Owns the pending project graph until `build`
#[derive(Debug)]
pub struct Builder {
    base_path: String,
    projects: Vec<ProjectDraft>,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

impl Builder {
    /// `base_path` is stored verbatim for the viewer's router
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            projects: Vec::new(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn set_base_path(&mut self, base_path: impl Into<String>) {
        self.base_path = base_path.into();
    }

    /// Append a project
    ///
    /// Fails if the name is empty, the id is malformed or already taken, or
    /// the project would be a second root (no id). An empty id counts as no id.
    pub fn add_project(&mut self, spec: ProjectSpec) -> MuwanxResult<ProjectHandle<'_>> {
        if let Some(violation) = name_violation("app", "project", &spec.name) {
            return Err(violation.into());
        }

        let id = match spec.id.filter(|id| !id.is_empty()) {
            Some(raw) => {
                let id = ProjectId::new(raw)
                    .map_err(|err| Violation::new(project_scope(&spec.name), err.to_string()))?;
                if let Some(owner) = self.projects.iter().find(|p| p.id.as_ref() == Some(&id)) {
                    return Err(duplicate_id_violation(&spec.name, id.as_str(), &owner.name).into());
                }
                Some(id)
            }
            None => {
                if let Some(root) = self.projects.iter().find(|p| p.is_root()) {
                    let roots = [root.name.as_str(), spec.name.as_str()];
                    return Err(multiple_roots_violation(&roots).into());
                }
                None
            }
        };

        self.projects.push(ProjectDraft {
            name: spec.name,
            id,
            metadata: spec.metadata,
            scenes: Vec::new(),
        });
        let last = self.projects.len() - 1;
        Ok(ProjectHandle::new(&mut self.projects[last]))
    }

    /// Re-acquire a handle for the project at `index` (insertion order)
    pub fn project_mut(&mut self, index: usize) -> Option<ProjectHandle<'_>> {
        self.projects.get_mut(index).map(ProjectHandle::new)
    }

    /// Read-only snapshot of the pending projects
    pub fn get_projects(&self) -> Vec<ProjectView<'_>> {
        self.projects.iter().map(ProjectView::new).collect()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Validate the whole graph and freeze it into an `App`
    ///
    /// Every violation is reported, not just the first.
    pub fn build(self) -> MuwanxResult<App> {
        self.validate()?;
        let projects = self.projects.into_iter().map(ProjectDraft::freeze).collect();
        Ok(App::new(self.base_path, projects))
    }

    fn validate(&self) -> MuwanxResult<()> {
        let mut validator = GraphValidator::new();

        for project in &self.projects {
            validator.check_name("app", "project", &project.name);
        }
        validator.check_project_ids(
            self.projects
                .iter()
                .map(|p| (p.name.as_str(), p.id.as_ref().map(ProjectId::as_str))),
        );

        for project in &self.projects {
            let scope = project_scope(&project.name);
            for scene in &project.scenes {
                validator.check_name(&scope, "scene", &scene.name);
            }
            validator.check_unique(&scope, "scene", project.scenes.iter().map(|s| s.name.as_str()));

            for scene in &project.scenes {
                let scope = scene_scope(&project.name, &scene.name);
                for policy in &scene.policies {
                    validator.check_name(&scope, "policy", &policy.name);
                }
                validator.check_unique(
                    &scope,
                    "policy",
                    scene.policies.iter().map(|p| p.name.as_str()),
                );
            }
        }

        validator.finish().into_result()
    }
}
