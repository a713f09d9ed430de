/*
Copyright 2017 Takashi Ogura

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

use auto_impl::auto_impl;
use rand::{rngs::StdRng, Rng, SeedableRng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::*;

use crate::{
    collision::CollisionOracle,
    configuration::{distance, Configuration},
    errors::*,
    path::PlannedPath,
    sampler::Sampler,
    steer::{Extender, Extension},
    tree::{NearestStrategy, Tree},
};

/// State of the planning loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlannerState {
    Running,
    Succeeded,
    Failed,
}

/// Why the planner gave up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationReason {
    /// All the samples have been drawn
    SampleBudgetExhausted,
    /// The wall-clock timeout has elapsed
    DeadlineExceeded,
    /// [`CancelToken::cancel`] has been called
    Cancelled,
}

/// Successful plan
#[derive(Clone, Debug)]
pub struct PlanReport {
    pub path: PlannedPath,
    /// Number of drawn samples
    pub samples: usize,
    /// Number of vertices of the tree at the end
    pub tree_size: usize,
    pub elapsed: Duration,
}

/// Unsuccessful plan
#[derive(Clone, Debug)]
pub struct PlanFailure {
    pub reason: TerminationReason,
    /// Number of drawn samples
    pub samples: usize,
    /// Number of vertices of the tree at the end
    pub tree_size: usize,
    pub elapsed: Duration,
}

/// Outcome of a planning request
///
/// Not finding a path is not an error: RRT is only probabilistically complete
/// and can run out of samples.
#[derive(Clone, Debug)]
pub enum PlanOutcome {
    Found(PlanReport),
    NotFound(PlanFailure),
}

impl PlanOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, PlanOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&PlannedPath> {
        match self {
            PlanOutcome::Found(report) => Some(&report.path),
            PlanOutcome::NotFound(_) => None,
        }
    }

    pub fn samples(&self) -> usize {
        match self {
            PlanOutcome::Found(report) => report.samples,
            PlanOutcome::NotFound(failure) => failure.samples,
        }
    }

    pub fn tree_size(&self) -> usize {
        match self {
            PlanOutcome::Found(report) => report.tree_size,
            PlanOutcome::NotFound(failure) => failure.tree_size,
        }
    }

    pub fn state(&self) -> PlannerState {
        match self {
            PlanOutcome::Found(_) => PlannerState::Succeeded,
            PlanOutcome::NotFound(_) => PlannerState::Failed,
        }
    }

    /// Rows handed to the caller
    ///
    /// On failure the only row is `start` and the reported length is 0.
    pub fn into_output(self, start: &Configuration) -> PlanOutput {
        match self {
            PlanOutcome::Found(report) => PlanOutput {
                plan_length: report.path.len(),
                plan: report.path.to_vecs(),
            },
            PlanOutcome::NotFound(_) => PlanOutput {
                plan: vec![start.to_vec()],
                plan_length: 0,
            },
        }
    }
}

/// Plan as rows of joint angles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanOutput {
    pub plan: Vec<Vec<f64>>,
    pub plan_length: usize,
}

/// Receives the progress of the planning loop
///
/// Every method has an empty default implementation.
#[auto_impl(&mut, Box)]
pub trait PlanObserver {
    /// Called after a vertex has been inserted in the tree
    fn on_vertex_added(&mut self, _samples: usize, _index: usize, _config: &Configuration) {}
    /// Called once when the loop stops
    fn on_finished(&mut self, _state: PlannerState, _samples: usize, _tree_size: usize) {}
}

/// Observer which ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}

/// Flag to stop a running plan from another thread
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// RRT planner in the joint space of an arm
#[derive(Clone, Debug)]
pub struct RrtPlanner {
    extender: Extender,
    /// Max num of samples
    max_samples: usize,
    /// A new vertex closer than this to the goal ends the search
    goal_tolerance: f64,
    /// Probability to sample the goal itself
    goal_bias: f64,
    nearest: NearestStrategy,
    timeout: Option<Duration>,
}

impl RrtPlanner {
    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    pub fn step_length(&self) -> f64 {
        self.extender.step_length()
    }

    pub fn goal_tolerance(&self) -> f64 {
        self.goal_tolerance
    }

    /// Plan with a random source seeded by `seed`
    ///
    /// The same seed with the same inputs always gives the same result.
    pub fn plan_with_seed<O>(
        &self,
        oracle: &O,
        start: &Configuration,
        goal: &Configuration,
        seed: u64,
    ) -> Result<PlanOutcome>
    where
        O: CollisionOracle + ?Sized,
    {
        let mut rng = StdRng::seed_from_u64(seed);
        self.plan(oracle, start, goal, &mut rng)
    }

    /// Plan the sequence of joint angles from `start` to `goal`
    ///
    /// # Arguments
    ///
    /// - `oracle`: tells if a configuration is collision free.
    /// - `start`: initial joint angles, the root of the tree.
    /// - `goal`: goal joint angles, must have the same dof as `start`.
    /// - `rng`: random source of the samples.
    pub fn plan<O, R>(
        &self,
        oracle: &O,
        start: &Configuration,
        goal: &Configuration,
        rng: &mut R,
    ) -> Result<PlanOutcome>
    where
        O: CollisionOracle + ?Sized,
        R: Rng + ?Sized,
    {
        self.plan_with(
            oracle,
            start,
            goal,
            rng,
            &mut NoopObserver,
            &CancelToken::new(),
        )
    }

    /// Same as [`RrtPlanner::plan`], reporting the progress to `observer` and
    /// stopping early if `cancel` is triggered
    pub fn plan_with<O, R, V>(
        &self,
        oracle: &O,
        start: &Configuration,
        goal: &Configuration,
        rng: &mut R,
        observer: &mut V,
        cancel: &CancelToken,
    ) -> Result<PlanOutcome>
    where
        O: CollisionOracle + ?Sized,
        R: Rng + ?Sized,
        V: PlanObserver + ?Sized,
    {
        check_request(oracle, start, goal)?;

        let started = Instant::now();
        let deadline = self.timeout.map(|timeout| started + timeout);
        let sampler = if self.goal_bias > 0.0 {
            Sampler::with_goal_bias(goal.clone(), self.goal_bias)
        } else {
            Sampler::uniform(start.dof())
        };
        let mut tree = Tree::with_strategy(start.clone(), self.nearest);
        let mut samples = 0;
        info!(
            "start planning: dof={}, max_samples={}, step_length={}, goal_tolerance={}",
            start.dof(),
            self.max_samples,
            self.step_length(),
            self.goal_tolerance
        );

        let terminal = loop {
            if cancel.is_cancelled() {
                break Err(TerminationReason::Cancelled);
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                break Err(TerminationReason::DeadlineExceeded);
            }
            if samples >= self.max_samples {
                break Err(TerminationReason::SampleBudgetExhausted);
            }
            samples += 1;

            let sample = sampler.sample(rng);
            let nearest = tree.nearest(&sample);
            let reached = match self
                .extender
                .extend(tree.vertex_config(nearest), &sample, oracle)
            {
                Extension::Reached(config) => config,
                Extension::Blocked => continue,
            };
            let goal_distance = distance(&reached, goal);
            let index = tree.add_vertex(reached, nearest)?;
            trace!("sample {samples}: vertex {index} (parent {nearest})");
            observer.on_vertex_added(samples, index, tree.vertex_config(index));
            // only the newest vertex is compared with the goal
            if goal_distance < self.goal_tolerance {
                break Ok(index);
            }
        };

        let elapsed = started.elapsed();
        let outcome = match terminal {
            Ok(index) => {
                let path = tree.path_to(index);
                info!(
                    "path found: samples={samples}, vertices={}, length={}, distance={:.4}, elapsed={elapsed:?}",
                    tree.len(),
                    path.len(),
                    path.total_distance()
                );
                PlanOutcome::Found(PlanReport {
                    path,
                    samples,
                    tree_size: tree.len(),
                    elapsed,
                })
            }
            Err(reason) => {
                info!(
                    "path not found ({reason:?}): samples={samples}, vertices={}, elapsed={elapsed:?}",
                    tree.len()
                );
                PlanOutcome::NotFound(PlanFailure {
                    reason,
                    samples,
                    tree_size: tree.len(),
                    elapsed,
                })
            }
        };
        observer.on_finished(outcome.state(), samples, tree.len());
        Ok(outcome)
    }
}

/// Reject requests which cannot be planned before growing any tree
fn check_request<O>(oracle: &O, start: &Configuration, goal: &Configuration) -> Result<()>
where
    O: CollisionOracle + ?Sized,
{
    if start.dof() != goal.dof() {
        return Err(Error::DofMismatch(start.dof(), goal.dof()));
    }
    if start.dof() < 2 {
        return Err(Error::InvalidDof(start.dof()));
    }
    if let Some(index) = start.first_non_finite() {
        return Err(Error::NonFiniteAngle {
            part: ConfigurationPart::Start,
            index,
        });
    }
    if let Some(index) = goal.first_non_finite() {
        return Err(Error::NonFiniteAngle {
            part: ConfigurationPart::Goal,
            index,
        });
    }
    if !oracle.is_valid(start) {
        warn!("start {start} is not valid");
        return Err(Error::Collision {
            part: ConfigurationPart::Start,
        });
    }
    if !oracle.is_valid(goal) {
        warn!("goal {goal} is not valid");
        return Err(Error::Collision {
            part: ConfigurationPart::Goal,
        });
    }
    Ok(())
}

/// Builder pattern to create `RrtPlanner`
#[derive(Clone, Debug)]
pub struct RrtPlannerBuilder {
    step_length: f64,
    max_samples: usize,
    goal_tolerance: Option<f64>,
    goal_bias: f64,
    intermediate_checks: usize,
    nearest: NearestStrategy,
    timeout: Option<Duration>,
}

impl Default for RrtPlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RrtPlannerBuilder {
    pub fn new() -> Self {
        RrtPlannerBuilder {
            step_length: default_step_length(),
            max_samples: default_max_samples(),
            goal_tolerance: None,
            goal_bias: 0.0,
            intermediate_checks: 0,
            nearest: NearestStrategy::default(),
            timeout: None,
        }
    }

    pub fn step_length(mut self, step_length: f64) -> Self {
        self.step_length = step_length;
        self
    }

    pub fn max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// The step length is used if not set.
    pub fn goal_tolerance(mut self, goal_tolerance: f64) -> Self {
        self.goal_tolerance = Some(goal_tolerance);
        self
    }

    pub fn goal_bias(mut self, goal_bias: f64) -> Self {
        self.goal_bias = goal_bias;
        self
    }

    pub fn intermediate_checks(mut self, num: usize) -> Self {
        self.intermediate_checks = num;
        self
    }

    pub fn nearest_strategy(mut self, nearest: NearestStrategy) -> Self {
        self.nearest = nearest;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn finalize(self) -> Result<RrtPlanner> {
        let extender = Extender::new(self.step_length)?.intermediate_checks(self.intermediate_checks);
        let goal_tolerance = self.goal_tolerance.unwrap_or(self.step_length);
        if !(goal_tolerance.is_finite() && goal_tolerance > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "goal_tolerance must be positive, but {goal_tolerance} is given"
            )));
        }
        if self.max_samples == 0 {
            return Err(Error::InvalidConfig(
                "max_samples must be at least 1".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&self.goal_bias) {
            return Err(Error::InvalidConfig(format!(
                "goal_bias must be in [0, 1], but {} is given",
                self.goal_bias
            )));
        }
        Ok(RrtPlanner {
            extender,
            max_samples: self.max_samples,
            goal_tolerance,
            goal_bias: self.goal_bias,
            nearest: self.nearest,
            timeout: self.timeout,
        })
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RrtPlannerConfig {
    /// Max num of samples before giving up
    #[serde(default = "default_max_samples")]
    pub max_samples: usize,
    /// Max distance [rad] covered by one extension
    #[serde(default = "default_step_length")]
    pub step_length: f64,
    /// Distance [rad] to the goal which ends the search. `step_length` is used
    /// if not set.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_tolerance: Option<f64>,
    /// Probability to sample the goal itself
    #[serde(default)]
    pub goal_bias: f64,
    /// Num of configurations checked inside each extension in addition to
    /// its end
    #[serde(default)]
    pub intermediate_checks: usize,
    #[serde(default)]
    pub nearest: NearestStrategy,
    /// Seed of the random source. A seed is derived from the current time if
    /// not set.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Give up after this duration [sec]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_sec: Option<f64>,
}

fn default_max_samples() -> usize {
    100_000
}

fn default_step_length() -> f64 {
    0.5
}

impl Default for RrtPlannerConfig {
    fn default() -> Self {
        Self {
            max_samples: default_max_samples(),
            step_length: default_step_length(),
            goal_tolerance: None,
            goal_bias: 0.0,
            intermediate_checks: 0,
            nearest: NearestStrategy::default(),
            seed: None,
            timeout_sec: None,
        }
    }
}

impl RrtPlannerConfig {
    pub fn create_planner(&self) -> Result<RrtPlanner> {
        let mut builder = RrtPlannerBuilder::new()
            .step_length(self.step_length)
            .max_samples(self.max_samples)
            .goal_bias(self.goal_bias)
            .intermediate_checks(self.intermediate_checks)
            .nearest_strategy(self.nearest);
        if let Some(goal_tolerance) = self.goal_tolerance {
            builder = builder.goal_tolerance(goal_tolerance);
        }
        if let Some(timeout_sec) = self.timeout_sec {
            let timeout = Duration::try_from_secs_f64(timeout_sec).map_err(|e| {
                Error::InvalidConfig(format!("timeout_sec {timeout_sec} is invalid ({e})"))
            })?;
            builder = builder.timeout(timeout);
        }
        builder.finalize()
    }

    /// The configured seed, or one derived from the current time
    pub fn seed_or_time(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

/// Plan from `start` to `goal` with the settings of `config`
///
/// This is the outermost entry point: the random source is seeded here, from
/// `config.seed` or from the current time.
pub fn plan<O>(
    oracle: &O,
    start: &Configuration,
    goal: &Configuration,
    config: &RrtPlannerConfig,
) -> Result<PlanOutcome>
where
    O: CollisionOracle + ?Sized,
{
    let planner = config.create_planner()?;
    let seed = config.seed_or_time();
    info!("seed = {seed}");
    planner.plan_with_seed(oracle, start, goal, seed)
}

#[cfg(test)]
mod tests {
    use std::{f64::consts::FRAC_PI_2, thread, time::Duration};

    use super::*;
    use crate::collision::FreeSpace;

    #[derive(Default)]
    struct Recorder {
        vertices: Vec<(usize, usize, Configuration)>,
        finished: Option<(PlannerState, usize, usize)>,
    }

    impl PlanObserver for Recorder {
        fn on_vertex_added(&mut self, samples: usize, index: usize, config: &Configuration) {
            self.vertices.push((samples, index, config.clone()));
        }
        fn on_finished(&mut self, state: PlannerState, samples: usize, tree_size: usize) {
            self.finished = Some((state, samples, tree_size));
        }
    }

    #[test]
    fn test_builder_validation() {
        assert!(RrtPlannerBuilder::new().finalize().is_ok());
        assert!(matches!(
            RrtPlannerBuilder::new().step_length(0.0).finalize(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            RrtPlannerBuilder::new().goal_tolerance(-1.0).finalize(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            RrtPlannerBuilder::new().max_samples(0).finalize(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            RrtPlannerBuilder::new().goal_bias(1.5).finalize(),
            Err(Error::InvalidConfig(_))
        ));
        let planner = RrtPlannerBuilder::new().step_length(0.2).finalize().unwrap();
        assert_eq!(planner.goal_tolerance(), 0.2);
        assert_eq!(planner.max_samples(), 100_000);
    }

    #[test]
    fn test_request_validation() {
        let planner = RrtPlannerBuilder::new().finalize().unwrap();
        let ok = Configuration::from([0.0, 0.0]);
        assert!(matches!(
            planner.plan_with_seed(&FreeSpace, &ok, &Configuration::from([0.0, 0.0, 0.0]), 0),
            Err(Error::DofMismatch(2, 3))
        ));
        assert!(matches!(
            planner.plan_with_seed(
                &FreeSpace,
                &Configuration::from([0.0]),
                &Configuration::from([1.0]),
                0
            ),
            Err(Error::InvalidDof(1))
        ));
        assert!(matches!(
            planner.plan_with_seed(&FreeSpace, &ok, &Configuration::from([0.0, f64::NAN]), 0),
            Err(Error::NonFiniteAngle {
                part: ConfigurationPart::Goal,
                index: 1
            })
        ));
        let only_start = |c: &Configuration| c == &ok;
        assert!(matches!(
            planner.plan_with_seed(&only_start, &ok, &Configuration::from([1.0, 0.0]), 0),
            Err(Error::Collision {
                part: ConfigurationPart::Goal
            })
        ));
    }

    #[test]
    fn test_invalid_start_never_grows_tree() {
        let planner = RrtPlannerBuilder::new().finalize().unwrap();
        let mut recorder = Recorder::default();
        let result = planner.plan_with(
            &|c: &Configuration| c[0] > 1.0,
            &Configuration::from([0.0, 0.0]),
            &Configuration::from([2.0, 0.0]),
            &mut StdRng::seed_from_u64(0),
            &mut recorder,
            &CancelToken::new(),
        );
        assert!(matches!(
            result,
            Err(Error::Collision {
                part: ConfigurationPart::Start
            })
        ));
        assert!(recorder.vertices.is_empty());
        assert!(recorder.finished.is_none());
    }

    #[test]
    fn test_plan_free_space() {
        let planner = RrtPlannerBuilder::new().step_length(0.1).finalize().unwrap();
        let start = Configuration::from([0.0, 0.0]);
        let goal = Configuration::from([FRAC_PI_2, 0.0]);
        let mut recorder = Recorder::default();
        let outcome = planner
            .plan_with(
                &FreeSpace,
                &start,
                &goal,
                &mut StdRng::seed_from_u64(1),
                &mut recorder,
                &CancelToken::new(),
            )
            .unwrap();
        let PlanOutcome::Found(report) = &outcome else {
            panic!("path must be found in free space");
        };
        assert!(report.samples < planner.max_samples());
        assert_eq!(report.path.first(), Some(&start));
        assert!(distance(report.path.last().unwrap(), &goal) < 0.1);
        assert!(report.path.max_step() <= 0.1 + 1e-9);
        assert_eq!(report.tree_size, recorder.vertices.len() + 1);
        assert_eq!(
            recorder.finished,
            Some((PlannerState::Succeeded, report.samples, report.tree_size))
        );
        // the terminal vertex is the last one added
        assert_eq!(recorder.vertices.last().unwrap().1, report.tree_size - 1);

        let output = outcome.clone().into_output(&start);
        assert_eq!(output.plan_length, report.path.len());
        assert_eq!(output.plan[0], vec![0.0, 0.0]);
    }

    #[test]
    fn test_plan_blocked() {
        let start = Configuration::from([0.0, 0.0]);
        let goal = Configuration::from([3.0, 0.0]);
        let planner = RrtPlannerBuilder::new().max_samples(500).finalize().unwrap();
        let only_ends = |c: &Configuration| c == &start || c == &goal;
        let outcome = planner.plan_with_seed(&only_ends, &start, &goal, 3).unwrap();
        let PlanOutcome::NotFound(failure) = &outcome else {
            panic!("no path exists");
        };
        assert_eq!(failure.reason, TerminationReason::SampleBudgetExhausted);
        assert_eq!(failure.samples, 500);
        assert_eq!(failure.tree_size, 1);
        assert_eq!(outcome.samples(), 500);
        let output = outcome.into_output(&start);
        assert_eq!(output.plan, vec![vec![0.0, 0.0]]);
        assert_eq!(output.plan_length, 0);
    }

    #[test]
    fn test_same_seed_same_growth() {
        let planner = RrtPlannerBuilder::new().step_length(0.3).finalize().unwrap();
        let start = Configuration::from([0.5, 0.5]);
        let goal = Configuration::from([2.5, 1.0]);
        let wall = |c: &Configuration| !(1.0..1.5).contains(&c[0]) || c[1] > 2.0;
        let run = |seed| {
            let mut recorder = Recorder::default();
            let outcome = planner
                .plan_with(
                    &wall,
                    &start,
                    &goal,
                    &mut StdRng::seed_from_u64(seed),
                    &mut recorder,
                    &CancelToken::new(),
                )
                .unwrap();
            (recorder.vertices, outcome.path().cloned())
        };
        let (vertices1, path1) = run(9);
        let (vertices2, path2) = run(9);
        assert!(!vertices1.is_empty());
        assert_eq!(vertices1, vertices2);
        assert_eq!(path1, path2);
        assert!(path1.is_some());
    }

    #[test]
    fn test_goal_bias_converges() {
        let start = Configuration::from([0.0, 0.0]);
        let goal = Configuration::from([FRAC_PI_2, 0.0]);
        let planner = RrtPlannerBuilder::new()
            .step_length(0.1)
            .goal_bias(1.0)
            .finalize()
            .unwrap();
        let outcome = planner.plan_with_seed(&FreeSpace, &start, &goal, 0).unwrap();
        // straight line toward the goal, one sample per step
        assert_eq!(outcome.samples(), 15);
        assert_eq!(outcome.path().unwrap().len(), 16);
    }

    #[test]
    fn test_cancel() {
        let planner = RrtPlannerBuilder::new().finalize().unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();
        let outcome = planner
            .plan_with(
                &FreeSpace,
                &Configuration::from([0.0, 0.0]),
                &Configuration::from([3.0, 3.0]),
                &mut StdRng::seed_from_u64(0),
                &mut NoopObserver,
                &cancel,
            )
            .unwrap();
        match outcome {
            PlanOutcome::NotFound(failure) => {
                assert_eq!(failure.reason, TerminationReason::Cancelled);
                assert_eq!(failure.samples, 0);
            }
            PlanOutcome::Found(_) => panic!("must be cancelled"),
        }
    }

    #[test]
    fn test_cancel_from_other_thread() {
        let planner = RrtPlannerBuilder::new()
            .max_samples(usize::MAX)
            .finalize()
            .unwrap();
        let cancel = CancelToken::new();
        let start = Configuration::from([0.0, 0.0]);
        let goal = Configuration::from([3.0, 0.0]);
        let only_ends = |c: &Configuration| c == &start || c == &goal;
        let handle = {
            let cancel = cancel.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                cancel.cancel();
            })
        };
        let outcome = planner
            .plan_with(
                &only_ends,
                &start,
                &goal,
                &mut StdRng::seed_from_u64(0),
                &mut NoopObserver,
                &cancel,
            )
            .unwrap();
        handle.join().unwrap();
        assert!(matches!(
            outcome,
            PlanOutcome::NotFound(PlanFailure {
                reason: TerminationReason::Cancelled,
                ..
            })
        ));
    }

    #[test]
    fn test_timeout() {
        let planner = RrtPlannerConfig {
            max_samples: usize::MAX,
            timeout_sec: Some(0.05),
            ..Default::default()
        }
        .create_planner()
        .unwrap();
        let start = Configuration::from([0.0, 0.0]);
        let goal = Configuration::from([3.0, 0.0]);
        let only_ends = |c: &Configuration| c == &start || c == &goal;
        let outcome = planner.plan_with_seed(&only_ends, &start, &goal, 0).unwrap();
        assert!(matches!(
            outcome,
            PlanOutcome::NotFound(PlanFailure {
                reason: TerminationReason::DeadlineExceeded,
                ..
            })
        ));
    }

    #[test]
    fn test_config() {
        let config = RrtPlannerConfig::default();
        let planner = config.create_planner().unwrap();
        assert_eq!(planner.step_length(), 0.5);
        assert_eq!(planner.goal_tolerance(), 0.5);
        assert_eq!(planner.max_samples(), 100_000);

        let config: RrtPlannerConfig = toml::from_str(
            r#"
max_samples = 10
step_length = 0.25
goal_tolerance = 0.1
nearest = "Parallel"
seed = 4
"#,
        )
        .unwrap();
        assert_eq!(config.seed_or_time(), 4);
        let planner = config.create_planner().unwrap();
        assert_eq!(planner.max_samples(), 10);
        assert_eq!(planner.goal_tolerance(), 0.1);
        assert!(toml::from_str::<RrtPlannerConfig>("unknown = 1").is_err());
        assert!(RrtPlannerConfig {
            timeout_sec: Some(-1.0),
            ..Default::default()
        }
        .create_planner()
        .is_err());
        toml::to_string(&RrtPlannerConfig::default()).unwrap();
    }
}
