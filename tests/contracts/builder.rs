//! Builder contracts
//!
//! Graph rules enforced while projects, scenes and policies are added, and
//! again when the graph is frozen.

use muwanx::{Builder, MuwanxError, PolicySpec, ProjectSpec, SceneSpec};

/// CONTRACT: insertion order is preserved at every level
mod ordering {
    use super::*;

    #[test]
    fn contract_build_preserves_insertion_order() {
        let mut builder = Builder::default();
        for (name, id) in [("Zeta", None), ("Alpha", Some("alpha")), ("Mid", Some("mid"))] {
            let mut spec = ProjectSpec::new(name);
            if let Some(id) = id {
                spec = spec.with_id(id);
            }
            let mut project = builder.add_project(spec).unwrap();
            for scene_name in ["S2", "S1", "S3"] {
                let mut scene = project
                    .add_scene(SceneSpec::new(scene_name, "scene.xml"))
                    .unwrap();
                for policy_name in ["walk", "run", "idle"] {
                    scene
                        .add_policy(PolicySpec::new(policy_name, "policy.onnx"))
                        .unwrap();
                }
            }
        }

        let app = builder.build().unwrap();

        let projects: Vec<&str> = app.projects().iter().map(|p| p.name()).collect();
        assert_eq!(projects, ["Zeta", "Alpha", "Mid"]);
        for project in app.projects() {
            let scenes: Vec<&str> = project.scenes().iter().map(|s| s.name()).collect();
            assert_eq!(scenes, ["S2", "S1", "S3"]);
            for scene in project.scenes() {
                let policies: Vec<&str> = scene.policies().iter().map(|p| p.name()).collect();
                assert_eq!(policies, ["walk", "run", "idle"]);
            }
        }
    }
}

/// CONTRACT: project ids are unique, whatever the call order
mod project_ids {
    use super::*;

    #[test]
    fn contract_duplicate_id_rejected_at_add() {
        let mut builder = Builder::default();
        builder
            .add_project(ProjectSpec::new("First").with_id("g1"))
            .unwrap();

        let err = builder
            .add_project(ProjectSpec::new("Second").with_id("g1"))
            .unwrap_err();

        assert!(matches!(err, MuwanxError::Validation(_)), "got {err:?}");
        assert!(err.to_string().contains("already used by project 'First'"));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn contract_duplicate_id_rejected_in_either_order() {
        for (a, b) in [("A", "B"), ("B", "A")] {
            let mut builder = Builder::default();
            builder.add_project(ProjectSpec::new(a).with_id("shared")).unwrap();
            let result = builder.add_project(ProjectSpec::new(b).with_id("shared"));
            assert!(result.is_err(), "{a} then {b} should fail");
        }
    }

    #[test]
    fn contract_reserved_routing_characters_rejected() {
        for id in ["a/b", "a#b", "#", "/"] {
            let mut builder = Builder::default();
            let err = builder
                .add_project(ProjectSpec::new("Main").with_id(id))
                .unwrap_err();
            assert!(matches!(err, MuwanxError::Validation(_)), "id {id:?}: {err:?}");
        }
    }
}

/// CONTRACT: at most one root project (no id)
mod root_project {
    use super::*;

    #[test]
    fn contract_second_root_rejected() {
        let mut builder = Builder::default();
        builder.add_project(ProjectSpec::new("Main")).unwrap();

        let err = builder.add_project(ProjectSpec::new("Other")).unwrap_err();

        assert!(err.to_string().contains("only one project may omit an id"));
    }

    #[test]
    fn contract_empty_id_counts_as_root() {
        let mut builder = Builder::default();
        builder.add_project(ProjectSpec::new("Main")).unwrap();

        let result = builder.add_project(ProjectSpec::new("Other").with_id(""));

        assert!(result.is_err());
    }

    #[test]
    fn contract_root_route_is_slash() {
        let mut builder = Builder::default();
        builder.add_project(ProjectSpec::new("Main")).unwrap();
        builder
            .add_project(ProjectSpec::new("Go2").with_id("go2"))
            .unwrap();

        let app = builder.build().unwrap();
        let routes: Vec<String> = app.routes().into_iter().map(|r| r.route).collect();

        assert_eq!(routes, ["/", "#/go2/"]);
        assert_eq!(app.root_project().map(|p| p.name()), Some("Main"));
    }
}

/// CONTRACT: names are non-empty and unique within their parent
mod names {
    use super::*;

    #[test]
    fn contract_duplicate_scene_name_rejected() {
        let mut builder = Builder::default();
        let mut project = builder.add_project(ProjectSpec::new("Main")).unwrap();
        project.add_scene(SceneSpec::new("G1", "g1.xml")).unwrap();

        let err = project.add_scene(SceneSpec::new("G1", "other.xml")).unwrap_err();

        assert!(err.to_string().contains("duplicate scene name 'G1'"));
        assert_eq!(project.scene_names(), ["G1"]);
    }

    #[test]
    fn contract_scene_names_are_case_sensitive() {
        let mut builder = Builder::default();
        let mut project = builder.add_project(ProjectSpec::new("Main")).unwrap();
        project.add_scene(SceneSpec::new("G1", "g1.xml")).unwrap();

        assert!(project.add_scene(SceneSpec::new("g1", "g1.xml")).is_ok());
    }

    #[test]
    fn contract_duplicate_policy_name_scoped_to_scene() {
        let mut builder = Builder::default();
        let mut project = builder.add_project(ProjectSpec::new("Main")).unwrap();
        {
            let mut scene = project.add_scene(SceneSpec::new("G1", "g1.xml")).unwrap();
            scene.add_policy(PolicySpec::new("Tracking", "t.onnx")).unwrap();
            assert!(scene.add_policy(PolicySpec::new("Tracking", "t.onnx")).is_err());
        }
        let mut other = project.add_scene(SceneSpec::new("Go2", "go2.xml")).unwrap();
        assert!(other.add_policy(PolicySpec::new("Tracking", "t.onnx")).is_ok());
    }

    #[test]
    fn contract_empty_names_rejected() {
        let mut builder = Builder::default();
        assert!(builder.add_project(ProjectSpec::new("")).is_err());

        let mut project = builder.add_project(ProjectSpec::new("Main")).unwrap();
        assert!(project.add_scene(SceneSpec::new("", "g1.xml")).is_err());

        let mut scene = project.add_scene(SceneSpec::new("G1", "g1.xml")).unwrap();
        assert!(scene.add_policy(PolicySpec::new("", "t.onnx")).is_err());
    }
}
