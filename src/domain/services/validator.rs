//! Graph Validator
//!
//! Naming and routing rules for the entity graph. The builder runs single
//! checks eagerly as entities are added, and the whole set again at `build()`
//! so that every violation is reported in one pass.

use std::collections::{HashMap, HashSet};

use crate::domain::value_objects::ProjectId;
use crate::error::{ValidationErrors, Violation};

/// Scope label for a project, e.g. `project 'Main'`
pub fn project_scope(name: &str) -> String {
    format!("project '{}'", name)
}

/// Scope label for a scene, e.g. `project 'Main' / scene 'G1'`
pub fn scene_scope(project: &str, scene: &str) -> String {
    format!("project '{}' / scene '{}'", project, scene)
}

/// Accumulates violations across checks
#[derive(Debug, Default)]
pub struct GraphValidator {
    errors: ValidationErrors,
}

impl GraphValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names must be non-empty
    pub fn check_name(&mut self, scope: &str, kind: &str, name: &str) {
        if let Some(violation) = name_violation(scope, kind, name) {
            self.errors.push(violation);
        }
    }

    /// Names must be unique within one parent (exact, case-sensitive)
    pub fn check_unique<'a>(
        &mut self,
        scope: &str,
        kind: &str,
        names: impl IntoIterator<Item = &'a str>,
    ) {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut reported: HashSet<&str> = HashSet::new();
        for name in names {
            if !seen.insert(name) && reported.insert(name) {
                self.errors.push(duplicate_violation(scope, kind, name));
            }
        }
    }

    /// Project ids must be well-formed, unique, and at most one may be absent
    ///
    /// `projects` pairs each project name with its raw id (`None` or `""` for
    /// the root project).
    pub fn check_project_ids<'a>(
        &mut self,
        projects: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
    ) {
        let mut owners: HashMap<&str, &str> = HashMap::new();
        let mut roots: Vec<&str> = Vec::new();

        for (name, id) in projects {
            match id.filter(|id| !id.is_empty()) {
                None => roots.push(name),
                Some(id) => {
                    if let Err(err) = ProjectId::new(id) {
                        self.errors.push(Violation::new(project_scope(name), err.to_string()));
                        continue;
                    }
                    if let Some(first) = owners.get(id) {
                        self.errors
                            .push(duplicate_id_violation(name, id, first));
                    } else {
                        owners.insert(id, name);
                    }
                }
            }
        }

        if roots.len() > 1 {
            self.errors.push(multiple_roots_violation(&roots));
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.errors.push(violation);
    }

    pub fn finish(self) -> ValidationErrors {
        self.errors
    }
}

pub(crate) fn name_violation(scope: &str, kind: &str, name: &str) -> Option<Violation> {
    if name.trim().is_empty() {
        Some(Violation::new(scope, format!("{} name must not be empty", kind)))
    } else {
        None
    }
}

pub(crate) fn duplicate_violation(scope: &str, kind: &str, name: &str) -> Violation {
    Violation::new(scope, format!("duplicate {} name '{}'", kind, name))
}

pub(crate) fn duplicate_id_violation(project: &str, id: &str, first_owner: &str) -> Violation {
    Violation::new(
        project_scope(project),
        format!(
            "project id '{}' is already used by project '{}'",
            id, first_owner
        ),
    )
}

pub(crate) fn multiple_roots_violation(roots: &[&str]) -> Violation {
    let names = roots
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ");
    Violation::new(
        "app",
        format!(
            "only one project may omit an id (root route), found {}: {}",
            roots.len(),
            names
        ),
    )
}
