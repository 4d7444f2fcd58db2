//! Property tests for builder graph construction.

use proptest::prelude::*;

use muwanx::{Builder, MuwanxError, PolicySpec, ProjectSpec, SceneSpec};

/// Unique names, in generation order
fn unique_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set("[A-Za-z][A-Za-z0-9 ]{0,11}", 1..=max)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: with unique names at each scope, build succeeds and keeps
    /// insertion order at every level.
    #[test]
    fn property_unique_names_build_in_order(
        projects in unique_names(4),
        scenes in unique_names(4),
        policies in unique_names(3),
    ) {
        let mut builder = Builder::default();
        for (idx, project_name) in projects.iter().enumerate() {
            let mut spec = ProjectSpec::new(project_name.clone());
            if idx > 0 {
                spec = spec.with_id(format!("p{}", idx));
            }
            let mut project = builder.add_project(spec).unwrap();
            for scene_name in &scenes {
                let mut scene = project
                    .add_scene(SceneSpec::new(scene_name.clone(), "scene.xml"))
                    .unwrap();
                for policy_name in &policies {
                    scene
                        .add_policy(PolicySpec::new(policy_name.clone(), "policy.onnx"))
                        .unwrap();
                }
            }
        }

        let app = builder.build().unwrap();

        let built: Vec<&str> = app.projects().iter().map(|p| p.name()).collect();
        prop_assert_eq!(built, projects.iter().map(String::as_str).collect::<Vec<_>>());
        for project in app.projects() {
            let built: Vec<&str> = project.scenes().iter().map(|s| s.name()).collect();
            prop_assert_eq!(built, scenes.iter().map(String::as_str).collect::<Vec<_>>());
            for scene in project.scenes() {
                let built: Vec<&str> = scene.policies().iter().map(|p| p.name()).collect();
                prop_assert_eq!(built, policies.iter().map(String::as_str).collect::<Vec<_>>());
            }
        }
    }

    /// PROPERTY: a repeated non-empty id is rejected wherever it appears.
    #[test]
    fn property_duplicate_id_always_rejected(
        count in 2usize..6,
        first in 0usize..6,
        second in 0usize..6,
    ) {
        let first = first % count;
        let second = second % count;
        prop_assume!(first != second);

        let mut builder = Builder::default();
        let mut outcome = Ok(());
        for idx in 0..count {
            let id = if idx == first || idx == second {
                "shared".to_string()
            } else {
                format!("p{}", idx)
            };
            if let Err(err) = builder.add_project(ProjectSpec::new(format!("P{}", idx)).with_id(id)) {
                outcome = Err(err);
                break;
            }
        }

        prop_assert!(matches!(outcome, Err(MuwanxError::Validation(_))));
    }

    /// PROPERTY: exactly one project may omit its id.
    #[test]
    fn property_second_root_always_rejected(count in 2usize..6, roots in 2usize..6) {
        let roots = roots.min(count);
        let mut builder = Builder::default();
        let mut accepted_roots = 0;
        for idx in 0..count {
            let mut spec = ProjectSpec::new(format!("P{}", idx));
            if idx >= roots {
                spec = spec.with_id(format!("p{}", idx));
            }
            if builder.add_project(spec).is_ok() && idx < roots {
                accepted_roots += 1;
            }
        }

        prop_assert_eq!(accepted_roots, 1);
        prop_assert!(builder.build().is_ok());
    }
}
