//! Bundle export contracts
//!
//! The directory layout is read by the viewer with hard-coded relative
//! paths, and the output directory must never be half-touched by a
//! rejected export.

use std::fs;

use muwanx::{Builder, ExportFormat, ModelBlob, MuwanxError, PolicySpec, ProjectSpec, SceneSpec};

use crate::common::*;

/// CONTRACT: sanitized names never collide silently
mod collisions {
    use super::*;

    #[test]
    fn contract_left_arm_collision_rejected_before_writing() {
        let env = TestEnv::new();
        let app = in_memory_app(&["Left Arm", "Left-Arm"]);
        let out = env.path("dist");

        let err = app.export(&out, ExportFormat::Bundle, false).unwrap_err();

        match err {
            MuwanxError::NameCollision {
                sanitized, names, ..
            } => {
                assert_eq!(sanitized, "left_arm");
                assert_eq!(names, ["Left Arm", "Left-Arm"]);
            }
            other => panic!("expected NameCollision, got {other:?}"),
        }
        assert!(!out.exists(), "collision must not create the output dir");
    }

    #[test]
    fn contract_collision_leaves_existing_output_untouched() {
        let env = TestEnv::new();
        env.write("dist/config.json", "{\"previous\":true}");
        let app = in_memory_app(&["Left Arm", "Left-Arm"]);
        let before = snapshot_tree(&env.path("dist"));

        let err = app
            .export(env.path("dist"), ExportFormat::Bundle, true)
            .unwrap_err();

        assert!(matches!(err, MuwanxError::NameCollision { .. }));
        assert_eq!(snapshot_tree(&env.path("dist")), before);
    }

    #[test]
    fn contract_policy_collision_within_scene() {
        let mut builder = Builder::default();
        let mut project = builder.add_project(ProjectSpec::new("Main")).unwrap();
        let mut scene = project
            .add_scene(SceneSpec::new("G1", ModelBlob::new("xml", b"<mujoco/>".to_vec())))
            .unwrap();
        for name in ["Walk Fast", "walk-fast"] {
            scene
                .add_policy(PolicySpec::new(name, ModelBlob::new("onnx", vec![1])))
                .unwrap();
        }
        let app = builder.build().unwrap();
        let env = TestEnv::new();

        let err = app
            .export(env.path("dist"), ExportFormat::Bundle, false)
            .unwrap_err();

        assert!(matches!(err, MuwanxError::NameCollision { ref sanitized, .. } if sanitized == "walk_fast"));
    }

    #[test]
    fn contract_config_export_ignores_asset_collisions() {
        let env = TestEnv::new();
        let app = in_memory_app(&["Left Arm", "Left-Arm"]);

        let result = app
            .export(env.path("dist"), ExportFormat::Config, false)
            .unwrap();

        assert_eq!(list_files(&env.path("dist")), ["config.json"]);
        assert_eq!(result.file_count(), 1);
    }
}

/// CONTRACT: project directories share one namespace across the app
mod project_dirs {
    use super::*;

    #[test]
    fn contract_projects_collide_regardless_of_id() {
        let mut builder = Builder::default();
        for spec in [ProjectSpec::new("Main"), ProjectSpec::new("main").with_id("m")] {
            let mut project = builder.add_project(spec).unwrap();
            project
                .add_scene(SceneSpec::new("G1", ModelBlob::new("xml", b"<mujoco/>".to_vec())))
                .unwrap();
        }
        let app = builder.build().unwrap();
        let env = TestEnv::new();
        let out = env.path("dist");

        let err = app.export(&out, ExportFormat::Bundle, false).unwrap_err();

        match err {
            MuwanxError::NameCollision {
                scope,
                sanitized,
                names,
            } => {
                assert_eq!(scope, "app projects");
                assert_eq!(sanitized, "main");
                assert_eq!(names, ["Main", "main"]);
            }
            other => panic!("expected NameCollision, got {other:?}"),
        }
        assert!(!out.exists());
    }
}

/// CONTRACT: every name becomes exactly one directory segment
mod segments {
    use super::*;

    #[test]
    fn contract_scene_names_that_are_not_segments_rejected() {
        let env = TestEnv::new();
        let app = in_memory_app(&[".", "a/b"]);
        let out = env.path("dist");

        let err = app.export(&out, ExportFormat::Bundle, false).unwrap_err();

        let messages: Vec<&str> = err.violations().iter().map(|v| v.message.as_str()).collect();
        assert_eq!(messages.len(), 2, "{err}");
        assert!(messages[0].contains("scene name '.'"), "{messages:?}");
        assert!(messages[1].contains("scene name 'a/b' contains a path separator"), "{messages:?}");
        assert!(err.violations().iter().all(|v| v.scope == "project 'Main'"));
        assert!(!out.exists());
        assert!(!env.path("a").exists());
    }

    #[test]
    fn contract_project_name_that_is_a_parent_component_rejected() {
        let mut builder = Builder::default();
        let mut project = builder.add_project(ProjectSpec::new("..")).unwrap();
        project
            .add_scene(SceneSpec::new("G1", ModelBlob::new("xml", b"<mujoco/>".to_vec())))
            .unwrap();
        let app = builder.build().unwrap();
        let env = TestEnv::new();
        let out = env.path("nested/dist");

        let err = app.export(&out, ExportFormat::Bundle, false).unwrap_err();

        assert!(matches!(err, MuwanxError::Validation(_)), "{err:?}");
        assert_eq!(err.violations()[0].scope, "app");
        assert!(err.violations()[0].message.contains("project name '..'"));
        assert!(!env.path("nested").exists());
    }

    #[test]
    fn contract_segment_checks_do_not_apply_to_config_export() {
        let env = TestEnv::new();
        let app = in_memory_app(&["a/b"]);

        app.export(env.path("dist"), ExportFormat::Config, false)
            .unwrap();

        assert_eq!(list_files(&env.path("dist")), ["config.json"]);
    }
}

/// CONTRACT: prior output is only replaced when asked
mod existing_output {
    use super::*;

    #[test]
    fn contract_rerun_without_overwrite_leaves_bytes_unchanged() {
        let env = TestEnv::new();
        let app = in_memory_app(&["G1"]);
        app.export(env.path("dist"), ExportFormat::Bundle, false)
            .unwrap();
        env.write("dist/notes.txt", "hand edited");
        let before = snapshot_tree(&env.path("dist"));

        let err = app
            .export(env.path("dist"), ExportFormat::Bundle, false)
            .unwrap_err();

        assert!(matches!(err, MuwanxError::AlreadyExists { .. }), "got {err:?}");
        assert_eq!(snapshot_tree(&env.path("dist")), before);
    }

    #[test]
    fn contract_empty_directory_is_not_prior_output() {
        let env = TestEnv::new();
        fs::create_dir_all(env.path("dist")).unwrap();

        let result = in_memory_app(&["G1"]).export(env.path("dist"), ExportFormat::Bundle, false);

        assert!(result.is_ok(), "{result:?}");
    }

    #[test]
    fn contract_overwrite_recreates_whole_subtree() {
        let env = TestEnv::new();
        env.write("dist/assets/scene/old/old/scene.xml", "stale");
        env.write("dist/config.json", "{}");

        in_memory_app(&["G1"])
            .export(env.path("dist"), ExportFormat::Bundle, true)
            .unwrap();

        assert_eq!(
            list_files(&env.path("dist")),
            [
                "assets/policy/main/g1/tracking.onnx",
                "assets/scene/main/g1/scene.xml",
                "config.json",
            ]
        );
    }
}

/// CONTRACT: the on-disk layout matches what the viewer loads
mod layout {
    use super::*;

    #[test]
    fn contract_inline_config_written_beside_policy_model() {
        let mut builder = Builder::default();
        let mut project = builder
            .add_project(ProjectSpec::new("Unitree Go2").with_id("go2"))
            .unwrap();
        let mut scene = project
            .add_scene(SceneSpec::new("Flat Ground", ModelBlob::new("xml", b"<mujoco/>".to_vec())))
            .unwrap();
        scene
            .add_policy(
                PolicySpec::new("Fast-Walk", ModelBlob::new("onnx", vec![0, 1, 2]))
                    .with_config(serde_json::json!({ "action_scale": 0.5 })),
            )
            .unwrap();
        let app = builder.build().unwrap();
        let env = TestEnv::new();

        app.export(env.path("dist"), ExportFormat::Bundle, false)
            .unwrap();

        assert_eq!(
            list_files(&env.path("dist")),
            [
                "assets/policy/unitree_go2/flat_ground/fast_walk.json",
                "assets/policy/unitree_go2/flat_ground/fast_walk.onnx",
                "assets/scene/unitree_go2/flat_ground/scene.xml",
                "config.json",
            ]
        );
        let config: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(env.path("dist/assets/policy/unitree_go2/flat_ground/fast_walk.json"))
                .unwrap(),
        )
        .unwrap();
        assert_eq!(config["action_scale"], 0.5);
    }

    #[test]
    fn contract_model_bytes_pass_through_unchanged() {
        let env = TestEnv::new();
        in_memory_app(&["G1"])
            .export(env.path("dist"), ExportFormat::Bundle, false)
            .unwrap();

        assert_eq!(
            fs::read(env.path("dist/assets/scene/main/g1/scene.xml")).unwrap(),
            G1_SCENE_XML.as_bytes()
        );
        assert_eq!(
            fs::read(env.path("dist/assets/policy/main/g1/tracking.onnx")).unwrap(),
            TRACKING_ONNX
        );
    }

    #[test]
    fn contract_bundle_manifest_matches_config_export() {
        let env = TestEnv::new();
        let app = in_memory_app(&["G1", "Go2"]);

        app.export(env.path("bundle"), ExportFormat::Bundle, false)
            .unwrap();
        app.export(env.path("config"), ExportFormat::Config, false)
            .unwrap();

        assert_eq!(
            fs::read(env.path("bundle/config.json")).unwrap(),
            fs::read(env.path("config/config.json")).unwrap()
        );
    }
}
