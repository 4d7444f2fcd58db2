//! Scenario: config-only export round-trips every structural field
//!
//! Names, ids and metadata come back exactly; models and policy configs
//! are never part of the document.

use std::fs;

use muwanx::domain::services::Manifest;
use muwanx::{Builder, ExportFormat, ModelBlob, PolicySpec, ProjectSpec, SceneSpec};
use serde_json::json;

use crate::common::*;

fn multi_project_app() -> muwanx::App {
    let mut builder = Builder::new("/muwanx/");
    {
        let mut main = builder
            .add_project(ProjectSpec::new("Main").with_meta("title", "Unitree G1"))
            .unwrap();
        let mut scene = main
            .add_scene(SceneSpec::new("G1", "g1.xml").with_meta("camera", json!({ "distance": 2.5 })))
            .unwrap();
        scene
            .add_policy(
                PolicySpec::new("Tracking", "tracking.onnx")
                    .with_config(json!({ "action_scale": 0.25 }))
                    .with_meta("stiffness", 40),
            )
            .unwrap();
    }
    {
        let mut go2 = builder
            .add_project(ProjectSpec::new("Unitree Go2").with_id("go2"))
            .unwrap();
        let mut scene = go2
            .add_scene(SceneSpec::new("Flat", ModelBlob::new("xml", b"<mujoco/>".to_vec())))
            .unwrap();
        scene
            .add_policy(PolicySpec::new("Walk", ModelBlob::new("onnx", vec![7])))
            .unwrap();
        scene
            .add_policy(PolicySpec::new("Run", ModelBlob::new("onnx", vec![8])))
            .unwrap();
    }
    builder.build().unwrap()
}

#[test]
fn scenario_config_export_round_trips_structure() {
    let env = TestEnv::new();
    let app = multi_project_app();

    app.export(env.path("site"), ExportFormat::Config, false)
        .unwrap();
    let parsed =
        Manifest::from_json(&fs::read_to_string(env.path("site/config.json")).unwrap()).unwrap();

    assert_eq!(parsed, app.manifest());
    assert_eq!(parsed.base_path, "/muwanx/");
    assert_eq!(parsed.version, env!("CARGO_PKG_VERSION"));

    let ids: Vec<Option<&str>> = parsed.projects.iter().map(|p| p.id.as_deref()).collect();
    assert_eq!(ids, [None, Some("go2")]);
    assert_eq!(parsed.projects[0].metadata["title"], "Unitree G1");
    assert_eq!(parsed.projects[0].scenes[0].metadata["camera"]["distance"], 2.5);
    assert_eq!(parsed.projects[0].scenes[0].policies[0].metadata["stiffness"], 40);

    let policies: Vec<&str> = parsed.projects[1].scenes[0]
        .policies
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(policies, ["Walk", "Run"]);
}

#[test]
fn scenario_config_export_excludes_models_and_policy_configs() {
    let env = TestEnv::new();

    multi_project_app()
        .export(env.path("site"), ExportFormat::Config, false)
        .unwrap();

    assert_eq!(list_files(&env.path("site")), ["config.json"]);
    let json = fs::read_to_string(env.path("site/config.json")).unwrap();
    assert!(!json.contains("action_scale"));
    assert!(!json.contains("tracking.onnx"));
    assert!(!json.contains("\"config\""));
}

#[test]
fn scenario_in_memory_document_matches_written_file() {
    let env = TestEnv::new();
    let app = multi_project_app();

    app.export(env.path("site"), ExportFormat::Config, false)
        .unwrap();

    assert_eq!(
        fs::read_to_string(env.path("site/config.json")).unwrap(),
        app.to_config_json().unwrap()
    );
}
