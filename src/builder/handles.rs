//! Builder handles
//!
//! A handle mutably borrows one staging draft and is the only way to attach
//! children to it. Handles cannot outlive the builder, so nothing can reach
//! into an entity once `Builder::build` has consumed it.

use super::drafts::{PolicyDraft, ProjectDraft, SceneDraft};
use super::spec::{PolicySpec, SceneSpec};
use crate::domain::entities::ROOT_ROUTE;
use crate::domain::services::validator::{
    duplicate_violation, name_violation, project_scope, scene_scope,
};
use crate::domain::value_objects::{Metadata, ModelSource, ProjectId};
use crate::error::MuwanxResult;

/// Mutable access to a pending project
#[derive(Debug)]
pub struct ProjectHandle<'a> {
    draft: &'a mut ProjectDraft,
}

impl<'a> ProjectHandle<'a> {
    pub(super) fn new(draft: &'a mut ProjectDraft) -> Self {
        Self { draft }
    }

    pub fn name(&self) -> &str {
        &self.draft.name
    }

    pub fn id(&self) -> Option<&ProjectId> {
        self.draft.id.as_ref()
    }

    /// Append a scene; names must be non-empty and unique within the project
    pub fn add_scene(&mut self, spec: SceneSpec) -> MuwanxResult<SceneHandle<'_>> {
        let scope = project_scope(&self.draft.name);
        if let Some(violation) = name_violation(&scope, "scene", &spec.name) {
            return Err(violation.into());
        }
        if self.draft.has_scene(&spec.name) {
            return Err(duplicate_violation(&scope, "scene", &spec.name).into());
        }

        self.draft.scenes.push(SceneDraft {
            name: spec.name,
            model: spec.model,
            metadata: spec.metadata,
            policies: Vec::new(),
        });
        let project = self.draft.name.as_str();
        let last = self.draft.scenes.len() - 1;
        Ok(SceneHandle::new(project, &mut self.draft.scenes[last]))
    }

    /// Re-acquire a handle for an already-added scene
    pub fn scene_mut(&mut self, name: &str) -> Option<SceneHandle<'_>> {
        let project = self.draft.name.as_str();
        self.draft
            .scenes
            .iter_mut()
            .find(|s| s.name == name)
            .map(|draft| SceneHandle::new(project, draft))
    }

    pub fn insert_metadata(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.draft.metadata.insert(key.into(), value.into());
    }

    /// Scene names in attach order
    pub fn scene_names(&self) -> Vec<&str> {
        self.draft.scenes.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Mutable access to a pending scene
#[derive(Debug)]
pub struct SceneHandle<'a> {
    project: &'a str,
    draft: &'a mut SceneDraft,
}

impl<'a> SceneHandle<'a> {
    fn new(project: &'a str, draft: &'a mut SceneDraft) -> Self {
        Self { project, draft }
    }

    pub fn name(&self) -> &str {
        &self.draft.name
    }

    pub fn model(&self) -> &ModelSource {
        &self.draft.model
    }

    /// Append a policy; names must be non-empty and unique within the scene
    pub fn add_policy(&mut self, spec: PolicySpec) -> MuwanxResult<PolicyHandle<'_>> {
        let scope = scene_scope(self.project, &self.draft.name);
        if let Some(violation) = name_violation(&scope, "policy", &spec.name) {
            return Err(violation.into());
        }
        if self.draft.has_policy(&spec.name) {
            return Err(duplicate_violation(&scope, "policy", &spec.name).into());
        }

        let source_path = spec
            .source_path
            .or_else(|| spec.model.as_path().map(|p| p.display().to_string()));

        self.draft.policies.push(PolicyDraft {
            name: spec.name,
            model: spec.model,
            metadata: spec.metadata,
            config: spec.config,
            config_path: spec.config_path,
            source_path,
        });
        let last = self.draft.policies.len() - 1;
        Ok(PolicyHandle {
            draft: &mut self.draft.policies[last],
        })
    }

    pub fn insert_metadata(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.draft.metadata.insert(key.into(), value.into());
    }

    /// Policy names in attach order
    pub fn policy_names(&self) -> Vec<&str> {
        self.draft.policies.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Mutable access to a pending policy
#[derive(Debug)]
pub struct PolicyHandle<'a> {
    draft: &'a mut PolicyDraft,
}

impl PolicyHandle<'_> {
    pub fn name(&self) -> &str {
        &self.draft.name
    }

    pub fn source_path(&self) -> Option<&str> {
        self.draft.source_path.as_deref()
    }

    pub fn insert_metadata(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.draft.metadata.insert(key.into(), value.into());
    }
}

/// Read-only snapshot of a pending project
#[derive(Debug, Clone, Copy)]
pub struct ProjectView<'a> {
    draft: &'a ProjectDraft,
}

impl<'a> ProjectView<'a> {
    pub(super) fn new(draft: &'a ProjectDraft) -> Self {
        Self { draft }
    }

    pub fn name(&self) -> &'a str {
        &self.draft.name
    }

    pub fn id(&self) -> Option<&'a ProjectId> {
        self.draft.id.as_ref()
    }

    pub fn metadata(&self) -> &'a Metadata {
        &self.draft.metadata
    }

    pub fn scene_names(&self) -> Vec<&'a str> {
        self.draft.scenes.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn policy_count(&self) -> usize {
        self.draft.scenes.iter().map(|s| s.policies.len()).sum()
    }

    pub fn route(&self) -> String {
        match &self.draft.id {
            Some(id) => id.route(),
            None => ROOT_ROUTE.to_string(),
        }
    }
}
