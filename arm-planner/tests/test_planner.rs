use std::f64::consts::{FRAC_PI_2, PI};

use arm_planner::{
    collision::{GridArmOracle, GridMap, PlanarArm},
    distance, CollisionOracle, Configuration, ConfigurationPart, Error, NearestStrategy,
    PlanOutcome, RrtPlannerBuilder, RrtPlannerConfig, TerminationReason,
};

fn assert_valid_path<O: CollisionOracle>(
    oracle: &O,
    outcome: &PlanOutcome,
    start: &Configuration,
    goal: &Configuration,
    step_length: f64,
) {
    let path = outcome.path().expect("path must be found");
    assert_eq!(path.first(), Some(start));
    assert!(distance(path.last().unwrap(), goal) < step_length);
    for w in path.configurations().windows(2) {
        assert!(distance(&w[0], &w[1]) <= step_length + 1e-9);
    }
    for config in path {
        assert!(oracle.is_valid(config), "{config} is in collision");
    }
}

#[test]
fn test_plan_empty_map() {
    let map = GridMap::empty(60, 60);
    let oracle = GridArmOracle::new(&map, PlanarArm::for_map(&map, 10.0));
    let start = Configuration::from([0.0, 0.0]);
    let goal = Configuration::from([FRAC_PI_2, 0.0]);
    let planner = RrtPlannerBuilder::new().finalize().unwrap();
    let outcome = planner.plan_with_seed(&oracle, &start, &goal, 0).unwrap();
    assert!(outcome.samples() < planner.max_samples());
    assert_valid_path(&oracle, &outcome, &start, &goal, planner.step_length());
}

#[test]
fn test_plan_around_obstacle() {
    let mut map = GridMap::empty(80, 60);
    // bar above the base
    map.fill_rect(35, 25, 45, 27);
    let oracle = GridArmOracle::new(&map, PlanarArm::for_map(&map, 10.0));
    let start = Configuration::from([0.0, FRAC_PI_2, FRAC_PI_2]);
    let goal = Configuration::from([FRAC_PI_2, FRAC_PI_2, PI]);
    assert!(!oracle.is_valid(&Configuration::from([FRAC_PI_2, FRAC_PI_2, FRAC_PI_2])));
    assert!(oracle.is_valid(&start));
    assert!(oracle.is_valid(&goal));

    let planner = RrtPlannerBuilder::new()
        .step_length(0.3)
        .intermediate_checks(2)
        .finalize()
        .unwrap();
    let outcome = planner.plan_with_seed(&oracle, &start, &goal, 21).unwrap();
    assert_valid_path(&oracle, &outcome, &start, &goal, planner.step_length());
}

#[test]
fn test_plan_unreachable_goal() {
    let mut map = GridMap::empty(60, 60);
    // the first link cannot swing from the right to the left of the base
    map.fill_rect(0, 5, 59, 6);
    let oracle = GridArmOracle::new(&map, PlanarArm::for_map(&map, 10.0));
    let start = Configuration::from([0.0, 0.0]);
    let goal = Configuration::from([PI, PI]);
    assert!(oracle.is_valid(&start));
    assert!(oracle.is_valid(&goal));

    let planner = RrtPlannerBuilder::new().max_samples(2000).finalize().unwrap();
    let outcome = planner.plan_with_seed(&oracle, &start, &goal, 5).unwrap();
    match &outcome {
        PlanOutcome::NotFound(failure) => {
            assert_eq!(failure.reason, TerminationReason::SampleBudgetExhausted);
            assert_eq!(failure.samples, 2000);
            assert!(failure.tree_size >= 1);
        }
        PlanOutcome::Found(_) => panic!("the goal is not reachable"),
    }
    let output = outcome.into_output(&start);
    assert_eq!(output.plan_length, 0);
    assert_eq!(output.plan, vec![start.to_vec()]);
}

#[test]
fn test_invalid_start() {
    let mut map = GridMap::empty(60, 60);
    map.fill_rect(33, 0, 35, 2);
    let oracle = GridArmOracle::new(&map, PlanarArm::for_map(&map, 10.0));
    let planner = RrtPlannerBuilder::new().finalize().unwrap();
    let result = planner.plan_with_seed(
        &oracle,
        &Configuration::from([0.0, 0.0]),
        &Configuration::from([FRAC_PI_2, 0.0]),
        0,
    );
    assert!(matches!(
        result,
        Err(Error::Collision {
            part: ConfigurationPart::Start
        })
    ));
}

#[test]
fn test_zero_step_length() {
    let config = RrtPlannerConfig {
        step_length: 0.0,
        ..Default::default()
    };
    assert!(matches!(config.create_planner(), Err(Error::InvalidConfig(_))));

    let map = GridMap::empty(60, 60);
    let oracle = GridArmOracle::new(&map, PlanarArm::for_map(&map, 10.0));
    assert!(matches!(
        arm_planner::plan(
            &oracle,
            &Configuration::from([0.0, 0.0]),
            &Configuration::from([FRAC_PI_2, 0.0]),
            &config
        ),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_plan_entry_point_is_reproducible() {
    let map = GridMap::empty(80, 60);
    let oracle = GridArmOracle::new(&map, PlanarArm::for_map(&map, 10.0));
    let start = Configuration::from([0.0, 0.0, 0.0]);
    let goal = Configuration::from([FRAC_PI_2, 0.5, 0.0]);
    let config = RrtPlannerConfig {
        seed: Some(1234),
        ..Default::default()
    };
    let a = arm_planner::plan(&oracle, &start, &goal, &config).unwrap();
    let b = arm_planner::plan(&oracle, &start, &goal, &config).unwrap();
    assert_eq!(a.samples(), b.samples());
    assert_eq!(a.path(), b.path());

    // the parallel search finds the same vertices
    let parallel = RrtPlannerConfig {
        nearest: NearestStrategy::Parallel,
        ..config
    };
    let c = arm_planner::plan(&oracle, &start, &goal, &parallel).unwrap();
    assert_eq!(a.path(), c.path());
    assert_valid_path(&oracle, &a, &start, &goal, 0.5);
}
