//! App entity - the finalized, immutable demo graph
//!
//! Produced only by `Builder::build`. Export lives in `application::export`.

use super::Project;

/// A built application: an ordered list of projects plus routing base path
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    base_path: String,
    projects: Vec<Project>,
}

/// One entry of the app's route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub project: String,
    pub route: String,
}

impl App {
    pub(crate) fn new(base_path: String, projects: Vec<Project>) -> Self {
        Self {
            base_path,
            projects,
        }
    }

    /// Deployment base path, embedded verbatim in the manifest
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Projects in insertion order
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn root_project(&self) -> Option<&Project> {
        self.projects.iter().find(|p| p.is_root())
    }

    pub fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.id().is_some_and(|pid| pid.as_str() == id))
    }

    pub fn scene_count(&self) -> usize {
        self.projects.iter().map(|p| p.scenes().len()).sum()
    }

    pub fn policy_count(&self) -> usize {
        self.projects
            .iter()
            .flat_map(|p| p.scenes())
            .map(|s| s.policies().len())
            .sum()
    }

    /// Route table in project order
    pub fn routes(&self) -> Vec<RouteEntry> {
        self.projects
            .iter()
            .map(|p| RouteEntry {
                project: p.name().to_string(),
                route: p.route(),
            })
            .collect()
    }
}
