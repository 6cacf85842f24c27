use walk_core::test_helpers::{grid_walker, test_config, test_walker};
use walk_core::{exited_radius, Walker, WalkerConfig, WalkerKind};

fn all_kinds() -> Vec<WalkerKind> {
    vec![
        WalkerKind::angle(),
        WalkerKind::variable_step(0.5, 1.5),
        WalkerKind::grid(),
        WalkerKind::biased(None, 0.5),
        WalkerKind::searcher(vec![2, 2]),
    ]
}

#[test]
fn every_variant_starts_with_single_origin_point() {
    for kind in all_kinds() {
        for dim in [2, 3, 5] {
            let kind = match &kind {
                WalkerKind::Searcher(_) => WalkerKind::searcher(vec![1; dim]),
                other => other.clone(),
            };
            let walker = test_walker(test_config("W").with_dim(dim), kind);
            assert_eq!(walker.path(), vec![vec![0.0; dim]]);
        }
    }
}

#[test]
fn walking_grows_path_by_step_count_for_every_variant() {
    for kind in all_kinds() {
        let config = test_config("W").with_restart(0.3, 3);
        let mut walker = test_walker(config, kind);
        let before = walker.path().len();
        walker.walk(25).expect("walk");
        assert_eq!(walker.path().len(), before + 25);
        assert_eq!(walker.path()[0], vec![0.0, 0.0]);
    }
}

#[test]
fn hard_restart_after_walks_restores_initial_state() {
    let mut walker = grid_walker("G");
    walker.walk(30).expect("walk");
    walker.walk(30).expect("walk");
    assert_eq!(walker.hard_restart(), vec![0.0, 0.0]);
    assert_eq!(walker.path(), vec![vec![0.0, 0.0]]);
    assert_eq!(walker.current_position(), vec![0.0, 0.0]);
}

#[test]
fn grid_walker_never_lands_on_obstacles() {
    let obstacles = vec![vec![0.0, 1.0], vec![0.0, -1.0]];
    let config = test_config("G").with_obstacles(obstacles.clone());
    let mut walker = test_walker(config, WalkerKind::grid());
    walker.walk(100).expect("walk");

    let path = walker.path();
    assert_eq!(path.len(), 101);
    for obstacle in &obstacles {
        assert!(!path.contains(obstacle));
    }
}

#[test]
fn grid_walker_escapes_diagonal_obstacles() {
    let obstacles = vec![vec![2.0, 2.0], vec![-2.0, -2.0]];
    let config = test_config("G").with_obstacles(obstacles.clone());
    let mut walker = test_walker(config, WalkerKind::grid());
    walker.walk(200).expect("walk");

    let path = walker.path();
    assert_eq!(path.len(), 201);
    for point in &path {
        for obstacle in &obstacles {
            let gap: f64 = point
                .iter()
                .zip(obstacle)
                .map(|(p, o)| (p - o).powi(2))
                .sum::<f64>()
                .sqrt();
            assert!(gap > 1.0, "{point:?} is within clearance of {obstacle:?}");
        }
    }
}

#[test]
fn grid_walker_teleports_through_magic_gates() {
    let placements = vec![vec![0.0, 1.0], vec![0.0, -1.0]];
    let destination = vec![4.0, 5.0];
    let config = WalkerConfig::new("G")
        .with_seed(21)
        .with_magic_gates(placements.clone(), vec![destination.clone()]);
    let mut walker = test_walker(config, WalkerKind::grid());

    // A single 100-step walk may miss both gates, so try several.
    let mut teleported = false;
    for _ in 0..50 {
        walker.hard_restart();
        walker.walk(100).expect("walk");
        let path = walker.path();
        assert_eq!(path.len(), 101);
        for placement in &placements {
            assert!(!path.contains(placement));
        }
        teleported |= path.contains(&destination);
    }
    assert!(teleported);
}

#[test]
fn axis_distance_requires_unit_axis_regardless_of_index() {
    let mut walker = grid_walker("G");
    walker.walk(10).expect("walk");
    for n in [0, 5, 10, 11, 1000] {
        assert!(walker.dist_from_axis_after(&[1.0, 1.0], n).is_err());
        assert!(walker.dist_from_axis_after(&[0.5, 0.0], n).is_err());
    }
    assert!(walker.dist_from_axis_after(&[1.0, 0.0], 10).is_ok());
}

#[test]
fn exited_radius_matches_norm_comparison() {
    let cases = [
        (vec![0.0, 0.0], 1.0),
        (vec![1.0, 0.0], 1.0),
        (vec![0.6, 0.8], 1.0),
        (vec![0.7, 0.8], 1.0),
        (vec![-5.0, 2.0], 3.0),
    ];
    for (point, radius) in cases {
        let norm = point.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert_eq!(exited_radius(&point, radius).unwrap(), norm > radius);
    }
    assert!(exited_radius(&[1.0, 1.0], 0.0).is_err());
}

#[test]
fn walker_metrics_follow_recorded_path() {
    let mut walker = grid_walker("G");
    walker
        .set_path(vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, -1.0],
            vec![3.0, -1.0],
            vec![3.0, 4.0],
        ])
        .expect("set path");

    assert_eq!(walker.dist_from_origin_after(4).unwrap(), 5.0);
    assert_eq!(walker.dist_from_axis_after(&[0.0, 1.0], 4).unwrap(), 3.0);
    assert_eq!(walker.times_crossed_y_axis_after(4).unwrap(), 1);
    assert_eq!(walker.exited_radius_at(2.0).unwrap(), Some(3));
    assert_eq!(walker.exited_radius_at(10.0).unwrap(), None);
    assert!(walker.dist_from_origin_after(5).is_err());
}

#[test]
fn invalid_variant_parameters_abort_construction() {
    let bad = vec![
        WalkerKind::variable_step(2.0, 1.0),
        WalkerKind::biased(Some(vec![1, 1]), 0.5),
        WalkerKind::biased(None, 2.0),
        WalkerKind::searcher(vec![1, 2, 3]),
    ];
    for kind in bad {
        assert!(Walker::new(test_config("W"), kind).is_err());
    }
}
