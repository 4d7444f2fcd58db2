//! Bundle Layout
//!
//! Maps a built app onto the directory structure the viewer expects:
//!
//! ```text
//! <output_dir>/config.json
//! <output_dir>/assets/scene/<project>/<scene>/scene.<ext>
//! <output_dir>/assets/policy/<project>/<scene>/<policy>.<ext>
//! <output_dir>/assets/policy/<project>/<scene>/<policy>.json
//! ```
//!
//! Every segment is an `AssetName`. Because sanitizing is lossy the planner
//! rejects any two siblings that land on the same segment, before anything
//! touches the disk.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::App;
use crate::domain::services::validator::{project_scope, scene_scope, GraphValidator};
use crate::domain::value_objects::AssetName;
use crate::error::{MuwanxError, MuwanxResult, Violation};

pub const MANIFEST_FILE: &str = "config.json";
pub const SCENE_ASSETS_DIR: &str = "assets/scene";
pub const POLICY_ASSETS_DIR: &str = "assets/policy";
pub const SCENE_FILE_STEM: &str = "scene";
pub const POLICY_CONFIG_EXTENSION: &str = "json";

/// What a bundle file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleFileKind {
    Manifest,
    SceneModel,
    PolicyModel,
    PolicyConfig,
}

impl BundleFileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleFileKind::Manifest => "manifest",
            BundleFileKind::SceneModel => "scene_model",
            BundleFileKind::PolicyModel => "policy_model",
            BundleFileKind::PolicyConfig => "policy_config",
        }
    }
}

impl fmt::Display for BundleFileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planned location of one policy inside its scene directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySlot {
    /// Index into `Scene::policies`
    pub policy: usize,
    pub stem: AssetName,
}

/// Planned location of one scene and its policies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneSlot {
    /// Index into `App::projects`
    pub project: usize,
    /// Index into `Project::scenes`
    pub scene: usize,
    /// `assets/scene/<project>/<scene>`, relative to the bundle root
    pub scene_dir: PathBuf,
    /// `assets/policy/<project>/<scene>`, relative to the bundle root
    pub policy_dir: PathBuf,
    pub policies: Vec<PolicySlot>,
    /// Violation scope naming the scene
    pub scope: String,
}

impl SceneSlot {
    /// Scene model path; `extension` comes from the model and must stay one segment
    pub fn scene_model_path(&self, extension: &str) -> MuwanxResult<PathBuf> {
        if let Some(problem) = extension_problem(extension) {
            return Err(MuwanxError::invalid(
                &self.scope,
                format!("scene model extension '{}' {}", extension, problem),
            ));
        }
        Ok(self.scene_dir.join(file_name(SCENE_FILE_STEM, extension)))
    }

    pub fn policy_model_path(&self, slot: &PolicySlot, extension: &str) -> MuwanxResult<PathBuf> {
        if let Some(problem) = extension_problem(extension) {
            return Err(MuwanxError::invalid(
                &self.scope,
                format!("policy '{}' model extension '{}' {}", slot.stem, extension, problem),
            ));
        }
        Ok(self.policy_dir.join(file_name(slot.stem.as_str(), extension)))
    }

    pub fn policy_config_path(&self, slot: &PolicySlot) -> PathBuf {
        self.policy_dir
            .join(file_name(slot.stem.as_str(), POLICY_CONFIG_EXTENSION))
    }
}

/// Collision-free placement of every scene and policy in an app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleLayout {
    pub scenes: Vec<SceneSlot>,
}

impl BundleLayout {
    /// Plan the layout, or fail if two names share a sanitized segment
    pub fn plan(app: &App) -> MuwanxResult<Self> {
        let mut validator = GraphValidator::new();

        let project_names = app.projects().iter().map(|p| p.name());
        let project_dirs = sanitize_siblings("app projects", project_names)?;

        let mut scenes = Vec::new();
        for (p_idx, (project, project_dir)) in app.projects().iter().zip(&project_dirs).enumerate()
        {
            check_segment(&mut validator, "app", "project", project.name(), project_dir);

            let scope = format!("{} scenes", project_scope(project.name()));
            let scene_dirs = sanitize_siblings(&scope, project.scenes().iter().map(|s| s.name()))?;

            for (s_idx, (scene, scene_dir)) in project.scenes().iter().zip(&scene_dirs).enumerate()
            {
                let scope = project_scope(project.name());
                check_segment(&mut validator, &scope, "scene", scene.name(), scene_dir);

                let scope = format!("{} policies", scene_scope(project.name(), scene.name()));
                let stems = sanitize_siblings(&scope, scene.policies().iter().map(|p| p.name()))?;

                let scope = scene_scope(project.name(), scene.name());
                let policies = scene
                    .policies()
                    .iter()
                    .zip(stems)
                    .enumerate()
                    .map(|(idx, (policy, stem))| {
                        check_segment(&mut validator, &scope, "policy", policy.name(), &stem);
                        PolicySlot { policy: idx, stem }
                    })
                    .collect();

                let relative = PathBuf::from(project_dir.as_str()).join(scene_dir.as_str());
                scenes.push(SceneSlot {
                    project: p_idx,
                    scene: s_idx,
                    scene_dir: PathBuf::from(SCENE_ASSETS_DIR).join(&relative),
                    policy_dir: PathBuf::from(POLICY_ASSETS_DIR).join(&relative),
                    policies,
                    scope,
                });
            }
        }

        validator.finish().into_result()?;
        Ok(Self { scenes })
    }

    /// Files the layout will produce, excluding the manifest
    pub fn asset_file_count(&self, app: &App) -> usize {
        self.scenes
            .iter()
            .map(|slot| {
                let scene = &app.projects()[slot.project].scenes()[slot.scene];
                let configs = scene.policies().iter().filter(|p| p.has_config()).count();
                1 + scene.policies().len() + configs
            })
            .sum()
    }
}

/// Sanitize sibling names, failing on the first shared segment
fn sanitize_siblings<'a>(
    scope: &str,
    names: impl Iterator<Item = &'a str>,
) -> MuwanxResult<Vec<AssetName>> {
    let names: Vec<&str> = names.collect();
    let sanitized: Vec<AssetName> = names.iter().map(|n| AssetName::sanitize(n)).collect();

    let mut groups: BTreeMap<&AssetName, Vec<usize>> = BTreeMap::new();
    for (idx, name) in sanitized.iter().enumerate() {
        groups.entry(name).or_default().push(idx);
    }

    // Report in first-occurrence order so the error is stable
    let first_collision = groups
        .iter()
        .filter(|(_, members)| members.len() > 1)
        .min_by_key(|(_, members)| members[0]);

    if let Some((name, members)) = first_collision {
        return Err(MuwanxError::NameCollision {
            scope: scope.to_string(),
            sanitized: name.to_string(),
            names: members.iter().map(|&i| names[i].to_string()).collect(),
        });
    }

    Ok(sanitized)
}

fn check_segment(
    validator: &mut GraphValidator,
    scope: &str,
    kind: &str,
    name: &str,
    segment: &AssetName,
) {
    if let Some(problem) = segment.segment_problem() {
        validator.push(Violation::new(
            scope,
            format!("{} name '{}' {}", kind, name, problem),
        ));
    }
}

/// Why a model extension cannot be appended to a file stem, if it cannot
fn extension_problem(extension: &str) -> Option<&'static str> {
    if extension.contains('/') || extension.contains('\\') {
        Some("contains a path separator")
    } else if extension.contains("..") {
        Some("contains a relative path component")
    } else if extension.contains('\0') {
        Some("contains a NUL byte")
    } else {
        None
    }
}

fn file_name(stem: &str, extension: &str) -> String {
    if extension.is_empty() {
        stem.to_string()
    } else {
        format!("{}.{}", stem, extension)
    }
}
