use super::*;
use walk_core::WalkError;

const DEMO: &str = r#"{
    "plain": {
        "type": "regular",
        "times_to_run": 5,
        "number_of_steps": 20,
        "walker": { "seed": 1 },
        "axis": [0, 1],
        "radius": 3.0
    },
    "seeker": {
        "type": "searcher",
        "times_to_run": 2,
        "number_of_steps": 10,
        "walker": { "n_dim": 3, "target": [1, 0, 0], "restart_every": 2, "seed": 2 },
        "axis": [1, 0, 0],
        "radius": 2.0
    },
    "pulled": {
        "type": "biased",
        "times_to_run": 3,
        "number_of_steps": 10,
        "walker": { "bias_direction": [0, -1], "bias_strength": 0.7, "name": "south" },
        "axis": [1, 0],
        "radius": 4.0
    }
}"#;

#[test]
fn parses_entries_with_defaults() {
    let config = ExperimentConfig::from_json_str(DEMO).expect("valid config");
    assert_eq!(config.simulations.len(), 3);

    let plain = &config.simulations["plain"];
    assert_eq!(plain.walker_type, WalkerType::Regular);
    assert_eq!(plain.walker.n_dim, 2);
    assert_eq!(plain.walker.restart_every, 1);
    assert_eq!(plain.walker.restart_chance, 0.0);
    assert_eq!(plain.walker.min_step_size, 0.5);
    assert_eq!(plain.walker.max_step_size, 1.5);
}

#[test]
fn builds_simulations_in_name_order() {
    let config = ExperimentConfig::from_json_str(DEMO).expect("valid config");
    let sims = config.build_simulations().expect("valid simulations");
    let names: Vec<&str> = sims.iter().map(|sim| sim.walker_name()).collect();
    // Entries are ordered by key; "pulled" carries an explicit walker name.
    assert_eq!(names, vec!["plain", "south", "seeker"]);
    assert_eq!(sims[2].dim(), 3);
    assert_eq!(sims[2].walker().kind().type_name(), "searcher");
}

#[test]
fn rejects_unknown_keys() {
    let json = r#"{ "a": { "type": "grid", "times_to_run": 1, "number_of_steps": 1,
        "walker": { "colour": "red" }, "axis": [0, 1], "radius": 1.0 } }"#;
    assert!(matches!(
        ExperimentConfig::from_json_str(json),
        Err(ExperimentError::Json(_))
    ));
}

#[test]
fn rejects_unknown_walker_type() {
    let json = r#"{ "a": { "type": "teleporter", "times_to_run": 1, "number_of_steps": 1,
        "axis": [0, 1], "radius": 1.0 } }"#;
    assert!(ExperimentConfig::from_json_str(json).is_err());
}

#[test]
fn rejects_negative_and_fractional_counts() {
    let negative = r#"{ "a": { "type": "grid", "times_to_run": -1, "number_of_steps": 1,
        "axis": [0, 1], "radius": 1.0 } }"#;
    let fractional = r#"{ "a": { "type": "grid", "times_to_run": 1, "number_of_steps": 2.5,
        "axis": [0, 1], "radius": 1.0 } }"#;
    assert!(ExperimentConfig::from_json_str(negative).is_err());
    assert!(ExperimentConfig::from_json_str(fractional).is_err());
}

#[test]
fn searcher_without_target_is_a_config_error() {
    let json = r#"{ "a": { "type": "searcher", "times_to_run": 1, "number_of_steps": 1,
        "axis": [0, 1], "radius": 1.0 } }"#;
    let config = ExperimentConfig::from_json_str(json).expect("parses");
    assert!(matches!(
        config.build_simulations(),
        Err(ExperimentError::Config(_))
    ));
}

#[test]
fn core_validation_errors_carry_the_entry_name() {
    let json = r#"{ "broken": { "type": "grid", "times_to_run": 0, "number_of_steps": 1,
        "axis": [0, 1], "radius": 1.0 } }"#;
    let config = ExperimentConfig::from_json_str(json).expect("parses");
    match config.build_simulations() {
        Err(ExperimentError::Walker { name, source }) => {
            assert_eq!(name, "broken");
            assert!(matches!(source, WalkError::InvalidArgument(_)));
        }
        other => panic!("expected walker error, got {other:?}"),
    }

    let json = r#"{ "flat": { "type": "grid", "times_to_run": 1, "number_of_steps": 1,
        "walker": { "n_dim": 1 }, "axis": [1], "radius": 1.0 } }"#;
    let config = ExperimentConfig::from_json_str(json).expect("parses");
    assert!(matches!(
        config.build_simulations(),
        Err(ExperimentError::Walker {
            source: WalkError::InvalidConfiguration(_),
            ..
        })
    ));
}

#[test]
fn empty_config_is_rejected() {
    let config = ExperimentConfig::from_json_str("{}").expect("parses");
    assert!(matches!(
        config.build_simulations(),
        Err(ExperimentError::Config(_))
    ));
}
